//! Session Context - 会话限界上下文
//!
//! 职责:
//! - 会话状态机（三态）
//! - 角色、凭证与用户资料值对象

mod state;
mod value_objects;

pub use state::SessionState;
pub use value_objects::{AuthToken, Role, UserProfile};
