//! HTTP 客户端错误
//!
//! 错误携带原始状态码与服务端错误载荷，调用方按 `body.message` 约定
//! 提取用户可见文案

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// 服务端错误载荷（非 2xx 响应体）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// 用户可见的错误信息
    #[serde(default)]
    pub message: Option<String>,
}

/// API 错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络不可达/连接失败（没有拿到响应对象）
    #[error("Network error: {0}")]
    Network(String),

    /// 请求超时
    #[error("Request timeout")]
    Timeout,

    /// 服务端返回非 2xx
    #[error("Request failed with HTTP {status}")]
    Status { status: StatusCode, body: ErrorBody },

    /// 响应体无法解析
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// 响应状态码（网络类错误没有）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 服务端给出的 message
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.message.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Network(format!("Cannot connect to API server: {}", e))
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extraction() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                message: Some("License plate already exists".to_string()),
            },
        };
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.server_message(), Some("License plate already exists"));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.status().is_none());
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_error_body_tolerates_unknown_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "nope", "code": 42, "details": []}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
