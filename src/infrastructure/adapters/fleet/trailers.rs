//! Trailer Service - 挂车资源的 REST 封装

use std::sync::Arc;

use crate::domain::fleet::{NewTrailer, Trailer};
use crate::infrastructure::http::{ApiClient, ApiError};

/// 挂车服务
#[derive(Clone)]
pub struct TrailerService {
    api: Arc<ApiClient>,
}

impl TrailerService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Trailer>, ApiError> {
        self.api.get("/trailers").await
    }

    pub async fn get(&self, id: &str) -> Result<Trailer, ApiError> {
        self.api.get(&format!("/trailers/{}", id)).await
    }

    pub async fn create(&self, draft: &NewTrailer) -> Result<Trailer, ApiError> {
        self.api.post("/trailers", draft).await
    }

    pub async fn update(&self, id: &str, draft: &NewTrailer) -> Result<Trailer, ApiError> {
        self.api.put(&format!("/trailers/{}", id), draft).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/trailers/{}", id)).await
    }
}
