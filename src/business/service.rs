//! Business Service 业务逻辑

use std::sync::Arc;

use crate::error::ServiceError;
use crate::model::types::{ProcessResult, TranslationRequest};

use super::detect::{detect_or_unknown, normalize};
use super::translator::Translator;

/// 翻译时使用的源语种
const SOURCE_AUTO: &str = "auto";

/// Business 服务
pub struct BusinessService {
    translator: Arc<dyn Translator>,
}

impl BusinessService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// 处理一次翻译请求
    ///
    /// 语种识别使用原始文本，翻译使用规范化后的文本
    pub async fn process(&self, request: TranslationRequest) -> Result<ProcessResult, ServiceError> {
        let normalized = normalize(&request.text);
        let detected = detect_or_unknown(&request.text);

        tracing::debug!(
            chars = normalized.chars().count(),
            detected = %detected,
            target = %request.target_language,
            "处理翻译请求"
        );

        let translated = self
            .translator
            .translate(&normalized, SOURCE_AUTO, &request.target_language)
            .await
            .map_err(|e| {
                tracing::warn!("翻译失败: {}", e);
                ServiceError::TranslationFailed(e.to_string())
            })?;

        Ok(ProcessResult {
            detected_language_of_request: detected,
            target_language: request.target_language,
            translated_text: translated,
        })
    }
}
