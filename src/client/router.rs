//! Client Service 路由

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::common::handlers::health;

use super::{
    handlers::{index, protected_route, translate},
    middleware::{ClientState, bearer_auth_middleware},
};

/// 创建 Client Service 路由
///
/// # 端点
/// - `GET /` - 服务说明
/// - `GET /health` - 健康检查
/// - `GET /some-protected-route` - 认证校验
/// - `POST /translate` - 翻译并保存记录
///
/// # 认证
/// 受保护端点需要 `Authorization: Bearer <token>` header
pub fn create_client_router(state: ClientState) -> Router {
    let protected = Router::new()
        .route("/some-protected-route", get(protected_route))
        .route("/translate", post(translate))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_middleware,
        ));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(protected)
        .with_state(state)
}
