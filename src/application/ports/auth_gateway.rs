//! Auth Gateway Port - 外部认证服务抽象
//!
//! 对应后端的 /login、/profile、/register 接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::session::{AuthToken, Role, UserProfile};

/// 认证服务错误
#[derive(Debug, Error)]
pub enum AuthError {
    /// 服务端以非 2xx 拒绝，携带状态码与服务端给出的 message
    #[error("Auth request rejected (HTTP {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// 服务端给出的用户可见 message（若有）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// 登录成功返回的凭证对
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: AuthToken,
    pub user: UserProfile,
}

/// 注册请求体（核心登录流程不使用，管理端建号用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: Role,
}

/// Auth Gateway Port
///
/// 外部认证服务的抽象接口
#[async_trait]
pub trait AuthGatewayPort: Send + Sync {
    /// 登录，成功返回 token + user
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;

    /// 获取当前用户资料（凭已持久化的 token）
    async fn fetch_profile(&self) -> Result<UserProfile, AuthError>;

    /// 注册新用户
    async fn register(&self, request: RegisterRequest) -> Result<UserProfile, AuthError>;
}
