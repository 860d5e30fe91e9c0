//! Business Service 路由

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::common::handlers::health;

use super::handlers::{index, process};
use super::service::BusinessService;

/// Business Service 共享状态
#[derive(Clone)]
pub struct BusinessState {
    pub service: Arc<BusinessService>,
}

impl BusinessState {
    pub fn new(service: BusinessService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// 创建 Business Service 路由
///
/// # 端点
/// - `GET /` - 服务说明
/// - `GET /health` - 健康检查
/// - `POST /process` - 规范化、识别语种并翻译
pub fn create_business_router(state: BusinessState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/process", post(process))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::business::translator::mock::MockTranslator;
    use crate::common::test_support::spawn_router;

    async fn spawn_business(translator: Arc<MockTranslator>) -> String {
        let state = BusinessState::new(BusinessService::new(translator));
        spawn_router(create_business_router(state)).await
    }

    #[tokio::test]
    async fn test_health_does_not_touch_translator() {
        let translator = Arc::new(MockTranslator::new());
        let base = spawn_business(translator.clone()).await;

        let body: serde_json::Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"status": "ok"}));
        assert!(translator.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_process_success() {
        let translator = Arc::new(MockTranslator::new());
        let base = spawn_business(translator.clone()).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/process", base))
            .json(&json!({"text": "Hello World", "target_language": "fr"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["target_language"], "fr");
        assert_eq!(body["translated_text"], "[fr] hello world");
        assert!(body["detected_language_of_request"].is_string());
    }

    #[tokio::test]
    async fn test_process_translation_failure_is_500() {
        let translator = Arc::new(MockTranslator::failing("invalid target language"));
        let base = spawn_business(translator).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/process", base))
            .json(&json!({"text": "Hello", "target_language": "zz"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["detail"], "Translation failed: invalid target language");
    }

    #[tokio::test]
    async fn test_process_rejects_missing_field() {
        let translator = Arc::new(MockTranslator::new());
        let base = spawn_business(translator.clone()).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/process", base))
            .json(&json!({"text": "Hello"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
        assert!(translator.calls.lock().is_empty());
    }
}
