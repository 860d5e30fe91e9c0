//! 三个服务共用的处理器

use axum::Json;

use crate::model::types::HealthResponse;

/// GET /health
///
/// 不检查任何下游依赖
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
