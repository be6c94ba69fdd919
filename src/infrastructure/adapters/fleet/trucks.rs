//! Truck Service - 卡车资源的 REST 封装

use std::sync::Arc;

use crate::domain::fleet::{NewTruck, Truck};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 卡车服务
#[derive(Clone)]
pub struct TruckService {
    api: Arc<ApiClient>,
}

impl TruckService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 列出全部卡车
    pub async fn list(&self) -> Result<Vec<Truck>, ApiError> {
        self.api.get("/trucks").await
    }

    /// 按 ID 获取
    pub async fn get(&self, id: &str) -> Result<Truck, ApiError> {
        self.api.get(&format!("/trucks/{}", id)).await
    }

    /// 新建，返回服务端落库后的记录
    pub async fn create(&self, draft: &NewTruck) -> Result<Truck, ApiError> {
        self.api.post("/trucks", draft).await
    }

    /// 更新
    pub async fn update(&self, id: &str, draft: &NewTruck) -> Result<Truck, ApiError> {
        self.api.put(&format!("/trucks/{}", id), draft).await
    }

    /// 删除
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/trucks/{}", id)).await
    }
}
