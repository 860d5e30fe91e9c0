//! Client Service HTTP 处理器

use axum::{Json, extract::State};

use crate::error::ServiceError;
use crate::model::types::{MessageResponse, TranslationRequest};

use super::middleware::ClientState;

/// GET /
pub async fn index() -> Json<&'static str> {
    Json("Client Service: Public API for text translation. Use your token to access.")
}

/// GET /some-protected-route
pub async fn protected_route() -> Json<MessageResponse> {
    Json(MessageResponse::new("You are authorized!"))
}

/// POST /translate
/// 翻译并保存记录
pub async fn translate(
    State(state): State<ClientState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = state.service.translate(payload).await?;
    Ok(Json(result))
}
