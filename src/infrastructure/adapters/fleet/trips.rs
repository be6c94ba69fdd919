//! Trip Service - 行程资源的 REST 封装
//!
//! 后端的列表路由按角色拆分: `/trips`（管理员分页列表）与
//! `/trip`（当前司机自己的行程），单数路由同时承担单条 CRUD

use std::sync::Arc;

use crate::domain::fleet::{NewTrip, PageQuery, Paginated, Trip};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 行程服务
#[derive(Clone)]
pub struct TripService {
    api: Arc<ApiClient>,
}

impl TripService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 管理员分页列表
    pub async fn list(&self, page: PageQuery) -> Result<Paginated<Trip>, ApiError> {
        self.api.get_with_query("/trips", &page).await
    }

    /// 当前司机自己的行程
    pub async fn my_trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.api.get("/trip").await
    }

    pub async fn get(&self, id: &str) -> Result<Trip, ApiError> {
        self.api.get(&format!("/trip/{}", id)).await
    }

    pub async fn create(&self, draft: &NewTrip) -> Result<Trip, ApiError> {
        self.api.post("/trip", draft).await
    }

    /// 更新（司机侧只改 status，载荷相同）
    pub async fn update(&self, id: &str, draft: &NewTrip) -> Result<Trip, ApiError> {
        self.api.put(&format!("/trip/{}", id), draft).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/trip/{}", id)).await
    }
}
