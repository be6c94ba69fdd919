//! Session 应用服务 - Session Store 与路由守卫

mod guard;
mod store;

pub use guard::{RouteDecision, RouteGuard};
pub use store::{LoginOutcome, SessionEvent, SessionStore, UnauthorizedSubscription};
