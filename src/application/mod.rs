//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（AuthGateway、SessionStorage）
//! - session: SessionStore 会话服务与 RouteGuard 路由守卫

pub mod ports;
pub mod session;

// Re-exports
pub use ports::{
    AuthError, AuthGatewayPort, LoginResponse, PersistedSession, RegisterRequest,
    SessionStoragePort, StorageError,
};
pub use session::{
    LoginOutcome, RouteDecision, RouteGuard, SessionEvent, SessionStore, UnauthorizedSubscription,
};
