//! 请求级错误类型
//!
//! 所有错误都直接终止当前请求，以 `{"detail": ...}` 的形式返回给调用方

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::model::types::ErrorBody;

/// 下游服务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Business,
    Database,
}

impl Upstream {
    pub fn name(&self) -> &'static str {
        match self {
            Upstream::Business => "Business Service",
            Upstream::Database => "Database Service",
        }
    }
}

/// 服务错误
#[derive(Debug)]
pub enum ServiceError {
    /// Bearer Token 缺失或不匹配
    Unauthorized,
    /// 无法连接下游服务
    UpstreamConnectivity { upstream: Upstream, reason: String },
    /// 下游服务可达但返回了非成功状态
    UpstreamFailure { upstream: Upstream },
    /// 翻译服务调用失败
    TranslationFailed(String),
}

impl ServiceError {
    /// 获取对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::UpstreamConnectivity { .. }
            | ServiceError::UpstreamFailure { .. }
            | ServiceError::TranslationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Unauthorized => write!(f, "Unauthorized"),
            ServiceError::UpstreamConnectivity { upstream, reason } => {
                write!(f, "Failed to connect to {}: {}", upstream.name(), reason)
            }
            ServiceError::UpstreamFailure {
                upstream: Upstream::Business,
            } => write!(f, "Business Service processing failed."),
            ServiceError::UpstreamFailure {
                upstream: Upstream::Database,
            } => write!(f, "Failed to save record in the database."),
            ServiceError::TranslationFailed(reason) => write!(f, "Translation failed: {}", reason),
        }
    }
}

impl std::error::Error for ServiceError {}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::UpstreamFailure {
                upstream: Upstream::Database
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::TranslationFailed("quota".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let err = ServiceError::UpstreamConnectivity {
            upstream: Upstream::Business,
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to connect to Business Service: connection refused"
        );
        assert_eq!(
            ServiceError::UpstreamFailure {
                upstream: Upstream::Business
            }
            .to_string(),
            "Business Service processing failed."
        );
        assert_eq!(
            ServiceError::TranslationFailed("HTTP 400".to_string()).to_string(),
            "Translation failed: HTTP 400"
        );
    }
}
