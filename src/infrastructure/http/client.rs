//! API Client - 带凭证注入的统一 HTTP 出站适配器
//!
//! 对应原前端的 axios 实例 + 两个拦截器:
//! - 出站: 每次请求前从持久化存储读取 token，存在则附加 `Authorization: Bearer`
//! - 入站: 网络错误记日志；401 发未授权信号；403 记日志；错误原样向调用方传播
//!
//! 适配器绝不清理存储、绝不跳转 — 存储的唯一写入者是 SessionStore，
//! 避免两层各自清理/跳转互相竞争

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::SessionStoragePort;
use crate::infrastructure::events::UnauthorizedSignal;

use super::error::{ApiError, ErrorBody};

/// API 客户端配置
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// 后端基础 URL（含 /api 前缀）
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// API 客户端
pub struct ApiClient {
    http: Client,
    config: ApiClientConfig,
    storage: Arc<dyn SessionStoragePort>,
    unauthorized: UnauthorizedSignal,
}

impl ApiClient {
    pub fn new(
        config: ApiClientConfig,
        storage: Arc<dyn SessionStoragePort>,
        unauthorized: UnauthorizedSignal,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config,
            storage,
            unauthorized,
        })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.dispatch(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::PUT, path).json(body))
            .await
    }

    /// DELETE，响应体丢弃
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// 构建请求：附加请求 ID 与 Bearer token
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header("X-Request-Id", Uuid::new_v4().to_string());

        match self.storage.token() {
            Ok(Some(token)) => {
                builder = builder.bearer_auth(token.as_str());
            }
            Ok(None) => {}
            Err(e) => {
                // token 读不出来时按匿名请求发出，由服务端裁决
                tracing::warn!(error = %e, "Failed to read token from storage");
            }
        }
        builder
    }

    async fn dispatch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// 发送请求，统一处理失败
    ///
    /// 检查顺序: 无响应（网络失败）→ 401 → 403 → 其余状态码
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                let err = ApiError::from_reqwest(e);
                tracing::error!(error = %err, "Network error - request did not reach the server");
                return Err(err);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => {
                // 只发信号，不碰存储 — 清理属于 SessionStore
                self.unauthorized.raise();
            }
            StatusCode::FORBIDDEN => {
                tracing::warn!(status = %status, "Access forbidden");
            }
            _ => {}
        }

        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ApiClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = ApiClientConfig::new("http://fleet.example.com/api").with_timeout(10);
        assert_eq!(config.base_url, "http://fleet.example.com/api");
        assert_eq!(config.timeout_secs, 10);
    }
}
