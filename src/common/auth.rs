//! Bearer Token 认证工具

use axum::{body::Body, http::Request};
use subtle::ConstantTimeEq;

/// 从 `Authorization: Bearer <token>` 头中提取 token
///
/// 前缀必须逐字匹配 `Bearer `，与配置的 token 做整串比较
pub fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// 常量时间字符串比较
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
