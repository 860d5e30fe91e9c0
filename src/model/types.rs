//! 服务间共享的请求/响应类型

use serde::{Deserialize, Serialize};

/// 未识别出语种时使用的占位值
pub const UNKNOWN_LANGUAGE: &str = "unknown";

// === 翻译请求 ===

/// 翻译请求（Client Service `/translate` 与 Business Service `/process` 共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// Business Service 的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub detected_language_of_request: String,
    pub target_language: String,
    pub translated_text: String,
}

/// Client Service 读取 Business Service 响应时使用的宽松视图
///
/// 逐字段读取：缺失或不是字符串的字段为 `None`，由 [`Record::from_reply`] 填充默认值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessReply {
    pub detected_language_of_request: Option<String>,
    pub translated_text: Option<String>,
}

impl BusinessReply {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Self {
            detected_language_of_request: field("detected_language_of_request"),
            translated_text: field("translated_text"),
        }
    }
}

// === 持久化记录 ===

/// 翻译记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub detected_language: String,
}

impl Record {
    /// 由原始请求和 Business Service 响应组合出一条记录
    ///
    /// 目标语言取自原始请求；译文缺失时为空串，语种缺失时为 "unknown"
    pub fn from_reply(request: &TranslationRequest, reply: BusinessReply) -> Self {
        Self {
            original_text: request.text.clone(),
            translated_text: reply.translated_text.unwrap_or_default(),
            target_language: request.target_language.clone(),
            detected_language: reply
                .detected_language_of_request
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        }
    }
}

/// POST /write 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub message: String,
    pub record: Record,
}

/// GET /read 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadResponse {
    pub records: Vec<Record>,
}

// === 通用响应 ===

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// 简单消息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TranslationRequest {
        TranslationRequest {
            text: "Hello World".to_string(),
            target_language: "fr".to_string(),
        }
    }

    #[test]
    fn test_record_from_full_reply() {
        let reply = BusinessReply::from_value(&serde_json::json!({
            "detected_language_of_request": "en",
            "target_language": "de",
            "translated_text": "bonjour le monde"
        }));

        let record = Record::from_reply(&request(), reply);
        assert_eq!(record.original_text, "Hello World");
        assert_eq!(record.translated_text, "bonjour le monde");
        // 目标语言始终来自原始请求
        assert_eq!(record.target_language, "fr");
        assert_eq!(record.detected_language, "en");
    }

    #[test]
    fn test_record_from_empty_reply_uses_defaults() {
        let reply = BusinessReply::from_value(&serde_json::json!({}));

        let record = Record::from_reply(&request(), reply);
        assert_eq!(record.translated_text, "");
        assert_eq!(record.detected_language, UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_mistyped_field_only_drops_itself() {
        let reply = BusinessReply::from_value(&serde_json::json!({
            "detected_language_of_request": "en",
            "translated_text": 5
        }));
        assert_eq!(reply.detected_language_of_request.as_deref(), Some("en"));
        assert_eq!(reply.translated_text, None);

        let record = Record::from_reply(&request(), reply);
        assert_eq!(record.detected_language, "en");
        assert_eq!(record.translated_text, "");
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let reply = BusinessReply::from_value(&serde_json::json!({
            "detected_language_of_request": null,
            "translated_text": null
        }));
        let record = Record::from_reply(&request(), reply);
        assert_eq!(record.detected_language, UNKNOWN_LANGUAGE);
        assert_eq!(record.translated_text, "");
    }

    #[test]
    fn test_record_requires_every_field() {
        let json = r#"{"original_text": "a", "translated_text": "b", "target_language": "fr"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_health_response_shape() {
        let value = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(value, serde_json::json!({"status": "ok"}));
    }
}
