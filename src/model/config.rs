use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use anyhow::Context;

/// 启动阶段的配置错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 未配置 Client Service 的 Bearer Token
    MissingClientToken,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingClientToken => write!(
                f,
                "CLIENT_SERVICE_TOKEN environment variable is not set. Please set it before running the service."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// translate-relay 配置
///
/// 三个服务共用同一份配置，各自只读取自己关心的字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口（未配置时使用各服务的默认端口）
    #[serde(default)]
    pub port: Option<u16>,

    /// Client Service 的 Bearer Token（环境变量 CLIENT_SERVICE_TOKEN 优先）
    #[serde(default)]
    pub client_service_token: Option<String>,

    #[serde(default = "default_business_service_url")]
    pub business_service_url: String,

    #[serde(default = "default_database_service_url")]
    pub database_service_url: String,

    /// 翻译服务地址
    #[serde(default = "default_translator_url")]
    pub translator_url: String,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// 出站请求超时（秒），未配置时不设超时
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_business_service_url() -> String {
    "http://business_service:5002".to_string()
}

fn default_database_service_url() -> String {
    "http://database_service:5003".to_string()
}

fn default_translator_url() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            client_service_token: None,
            business_service_url: default_business_service_url(),
            database_service_url: default_database_service_url(),
            translator_url: default_translator_url(),
            proxy_url: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置，文件不存在时返回默认配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }

    /// 用环境变量覆盖配置
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// 用给定的查找函数覆盖配置（便于测试时不触碰进程环境）
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("CLIENT_SERVICE_TOKEN") {
            self.client_service_token = Some(token);
        }
        if let Some(url) = lookup("BUSINESS_SERVICE_URL") {
            self.business_service_url = url;
        }
        if let Some(url) = lookup("DATABASE_SERVICE_URL") {
            self.database_service_url = url;
        }
        if let Some(url) = lookup("TRANSLATOR_URL") {
            self.translator_url = url;
        }
        self
    }

    /// 获取并校验 Client Service 的 Bearer Token
    ///
    /// 未设置或为空字符串都视为缺失
    pub fn client_token(&self) -> Result<&str, ConfigError> {
        match self.client_service_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingClientToken),
        }
    }

    /// 有效监听端口：显式配置优先，否则使用服务默认端口
    pub fn effective_port(&self, service_default: u16) -> u16 {
        self.port.unwrap_or(service_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = Config::load("/nonexistent/translate-relay/config.json").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.business_service_url, "http://business_service:5002");
        assert_eq!(config.database_service_url, "http://database_service:5003");
        assert!(config.client_service_token.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_parse_camel_case_keys() {
        let json = r#"{
            "port": 6000,
            "clientServiceToken": "secret",
            "businessServiceUrl": "http://localhost:5002",
            "requestTimeoutSecs": 30
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.port, Some(6000));
        assert_eq!(config.client_service_token.as_deref(), Some("secret"));
        assert_eq!(config.business_service_url, "http://localhost:5002");
        assert_eq!(config.database_service_url, "http://database_service:5003");
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_client_token_missing_or_empty() {
        let mut config = Config::default();
        assert_eq!(config.client_token(), Err(ConfigError::MissingClientToken));

        config.client_service_token = Some(String::new());
        assert_eq!(config.client_token(), Err(ConfigError::MissingClientToken));

        config.client_service_token = Some("abc".to_string());
        assert_eq!(config.client_token(), Ok("abc"));
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let mut config = Config::default();
        config.client_service_token = Some("from-file".to_string());

        let config = config.with_overrides_from(|key| match key {
            "CLIENT_SERVICE_TOKEN" => Some("from-env".to_string()),
            "DATABASE_SERVICE_URL" => Some("http://127.0.0.1:9999".to_string()),
            _ => None,
        });

        assert_eq!(config.client_service_token.as_deref(), Some("from-env"));
        assert_eq!(config.database_service_url, "http://127.0.0.1:9999");
        assert_eq!(config.business_service_url, "http://business_service:5002");
    }

    #[test]
    fn test_effective_port() {
        let mut config = Config::default();
        assert_eq!(config.effective_port(5003), 5003);
        config.port = Some(8080);
        assert_eq!(config.effective_port(5003), 8080);
    }
}
