//! Client Service 中间件

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::auth;
use crate::error::ServiceError;

use super::service::TranslateService;

/// Client Service 共享状态
#[derive(Clone)]
pub struct ClientState {
    /// Bearer Token
    pub token: String,
    /// 翻译服务
    pub service: Arc<TranslateService>,
}

impl ClientState {
    pub fn new(token: impl Into<String>, service: TranslateService) -> Self {
        Self {
            token: token.into(),
            service: Arc::new(service),
        }
    }
}

/// Bearer Token 认证中间件
///
/// 在任何下游调用之前执行
pub async fn bearer_auth_middleware(
    State(state): State<ClientState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = matches!(
        auth::extract_bearer_token(&request),
        Some(token) if auth::constant_time_eq(token, &state.token)
    );

    if authorized {
        next.run(request).await
    } else {
        tracing::debug!("认证失败: {} {}", request.method(), request.uri().path());
        ServiceError::Unauthorized.into_response()
    }
}
