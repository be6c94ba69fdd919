//! HTTP Auth Gateway - 调用后端认证接口
//!
//! 实现 AuthGatewayPort，通过 ApiClient 访问 /login、/profile、/register。
//! 401/403/网络错误的全局副作用都发生在 ApiClient 一层，这里只做
//! 载荷映射与错误收敛。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::{AuthError, AuthGatewayPort, LoginResponse, RegisterRequest};
use crate::domain::session::{AuthToken, UserProfile};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 登录请求体
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// 登录响应体
#[derive(Debug, Deserialize)]
struct LoginPayload {
    token: String,
    user: UserProfile,
}

/// HTTP 认证网关
pub struct HttpAuthGateway {
    api: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl From<ApiError> for AuthError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Timeout => AuthError::Timeout,
            ApiError::Network(msg) => AuthError::Network(msg),
            ApiError::Status { status, body } => AuthError::Rejected {
                status: status.as_u16(),
                message: body.message,
            },
            ApiError::InvalidResponse(msg) => AuthError::InvalidResponse(msg),
        }
    }
}

#[async_trait]
impl AuthGatewayPort for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let payload: LoginPayload = self
            .api
            .post("/login", &LoginRequest { email, password })
            .await?;

        Ok(LoginResponse {
            token: AuthToken::new(payload.token),
            user: payload.user,
        })
    }

    async fn fetch_profile(&self) -> Result<UserProfile, AuthError> {
        Ok(self.api.get("/profile").await?)
    }

    async fn register(&self, request: RegisterRequest) -> Result<UserProfile, AuthError> {
        Ok(self.api.post("/register", &request).await?)
    }
}
