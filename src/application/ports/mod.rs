//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod auth_gateway;
mod session_storage;

pub use auth_gateway::{AuthError, AuthGatewayPort, LoginResponse, RegisterRequest};
pub use session_storage::{
    PersistedSession, SessionStoragePort, StorageError, TOKEN_KEY, USER_KEY,
};
