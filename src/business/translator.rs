//! 外部翻译服务

use async_trait::async_trait;
use reqwest::Client;

use crate::common::join_url;

use super::languages::resolve_code;

/// 单次翻译允许的最大字符数
pub const MAX_TEXT_CHARS: usize = 5000;

/// 翻译服务抽象
#[async_trait]
pub trait Translator: Send + Sync {
    /// 将 `text` 从 `source` 翻译为 `target`，`source` 为 "auto" 时由服务端识别
    async fn translate(&self, text: &str, source: &str, target: &str) -> anyhow::Result<String>;
}

/// Google Translate 公共接口
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 从响应 JSON 中拼接译文
    ///
    /// 响应格式: `[[["译文片段", "原文片段", ...], ...], ..., "源语种"]`
    fn extract_translation(json: &serde_json::Value) -> Option<String> {
        let segments = json.get(0)?.as_array()?;
        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();
        if translated.is_empty() {
            None
        } else {
            Some(translated)
        }
    }
}

/// 解析语种代码或语种名，不支持时在发出请求前报错
fn resolve_language(language: &str) -> anyhow::Result<&'static str> {
    resolve_code(language)
        .ok_or_else(|| anyhow::anyhow!("{} --> No support for the provided language.", language))
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> anyhow::Result<String> {
        let source = match source {
            "auto" => "auto",
            other => resolve_language(other)?,
        };
        let target = resolve_language(target)?;

        if text.chars().count() >= MAX_TEXT_CHARS {
            anyhow::bail!(
                "text must be a valid text with maximum {} characters",
                MAX_TEXT_CHARS
            );
        }
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = join_url(&self.base_url, "/translate_a/single");
        let resp = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("请求发送失败: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("HTTP {}: {}", status, body);
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("解析翻译响应失败: {}", e))?;

        Self::extract_translation(&json)
            .ok_or_else(|| anyhow::anyhow!("No translation was found using the current translator"))
    }
}
