//! 文本规范化与语种识别

use crate::model::types::UNKNOWN_LANGUAGE;

/// 规范化文本：去掉首尾空白并转小写
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 识别文本语种
///
/// 返回 ISO 639-1 代码（没有 639-1 代码的语种返回 639-3 代码）。
/// 普通话没有 639-1 代码，返回翻译服务使用的 `zh-CN`。
/// 无法识别时（空文本、纯数字/标点等）返回 `None`。
pub fn detect_language(text: &str) -> Option<String> {
    let info = whatlang::detect(text)?;
    if info.lang() == whatlang::Lang::Cmn {
        return Some("zh-CN".to_string());
    }
    let code = info.lang().code();
    let code = isolang::Language::from_639_3(code)
        .and_then(|lang| lang.to_639_1())
        .unwrap_or(code);
    Some(code.to_string())
}

/// 识别语种，失败时降级为 "unknown"
pub fn detect_or_unknown(text: &str) -> String {
    detect_language(text).unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
}
