//! Maintenance Service - 维护规则与提醒的 REST 封装

use std::sync::Arc;

use crate::domain::fleet::{MaintenanceAlert, MaintenanceRule, NewMaintenanceRule};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 维护服务
#[derive(Clone)]
pub struct MaintenanceService {
    api: Arc<ApiClient>,
}

impl MaintenanceService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 全部维护规则
    pub async fn rules(&self) -> Result<Vec<MaintenanceRule>, ApiError> {
        self.api.get("/maintenance/rules").await
    }

    /// 更新维护规则
    pub async fn update_rule(
        &self,
        id: &str,
        draft: &NewMaintenanceRule,
    ) -> Result<MaintenanceRule, ApiError> {
        self.api
            .put(&format!("/maintenance/rules/{}", id), draft)
            .await
    }

    /// 全部维护提醒
    pub async fn alerts(&self) -> Result<Vec<MaintenanceAlert>, ApiError> {
        self.api.get("/maintenance/alerts").await
    }
}
