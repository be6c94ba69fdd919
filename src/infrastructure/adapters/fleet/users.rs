//! User Service - 用户资源的 REST 封装（管理端选择司机用）

use std::sync::Arc;

use crate::domain::session::{Role, UserProfile};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 用户服务
#[derive(Clone)]
pub struct UserService {
    api: Arc<ApiClient>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 全部用户
    pub async fn list(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.api.get("/users").await
    }

    /// 只取司机
    pub async fn drivers(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.api
            .get_with_query("/users", &[("role", Role::Driver.as_str())])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.api.get(&format!("/users/{}", id)).await
    }
}
