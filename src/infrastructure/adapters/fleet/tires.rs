//! Tire Service - 轮胎资源的 REST 封装

use std::sync::Arc;

use crate::domain::fleet::{NewTire, PageQuery, Paginated, Tire, TireMaintenance};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 轮胎服务
#[derive(Clone)]
pub struct TireService {
    api: Arc<ApiClient>,
}

impl TireService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 分页列出轮胎
    pub async fn list(&self, page: PageQuery) -> Result<Paginated<Tire>, ApiError> {
        self.api.get_with_query("/tires", &page).await
    }

    pub async fn get(&self, id: &str) -> Result<Tire, ApiError> {
        self.api.get(&format!("/tires/{}", id)).await
    }

    pub async fn create(&self, draft: &NewTire) -> Result<Tire, ApiError> {
        self.api.post("/tires", draft).await
    }

    pub async fn update(&self, id: &str, draft: &NewTire) -> Result<Tire, ApiError> {
        self.api.put(&format!("/tires/{}", id), draft).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/tires/{}", id)).await
    }

    /// 单条轮胎的保养状态
    pub async fn maintenance_status(&self, id: &str) -> Result<TireMaintenance, ApiError> {
        self.api.get(&format!("/tires/{}/maintenance", id)).await
    }
}
