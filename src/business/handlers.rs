//! Business Service HTTP 处理器

use axum::{Json, extract::State};

use crate::error::ServiceError;
use crate::model::types::{ProcessResult, TranslationRequest};

use super::router::BusinessState;

/// GET /
pub async fn index() -> Json<&'static str> {
    Json("Business Service: Preprocess and translate text in one service.")
}

/// POST /process
/// 规范化、识别语种并翻译
pub async fn process(
    State(state): State<BusinessState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<ProcessResult>, ServiceError> {
    let result = state.service.process(payload).await?;
    Ok(Json(result))
}
