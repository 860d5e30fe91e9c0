//! Client Service 业务逻辑：调用下游服务

use reqwest::Client;

use crate::common::join_url;
use crate::error::{ServiceError, Upstream};
use crate::model::types::{BusinessReply, Record, TranslationRequest};

/// 翻译并持久化服务
///
/// 每次调用恰好请求一次 Business Service；仅当其成功时才请求一次 Database Service
pub struct TranslateService {
    client: Client,
    process_url: String,
    write_url: String,
}

impl TranslateService {
    pub fn new(client: Client, business_service_url: &str, database_service_url: &str) -> Self {
        Self {
            client,
            process_url: join_url(business_service_url, "/process"),
            write_url: join_url(database_service_url, "/write"),
        }
    }

    /// 翻译并保存记录，成功时原样返回 Business Service 的响应体
    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        let business_result = self.call_business(&request).await?;

        let reply = BusinessReply::from_value(&business_result);
        let record = Record::from_reply(&request, reply);

        self.save_record(&record).await?;

        Ok(business_result)
    }

    /// POST {business}/process
    async fn call_business(
        &self,
        request: &TranslationRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        let resp = self
            .client
            .post(&self.process_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("连接 Business Service 失败: {}", e);
                ServiceError::UpstreamConnectivity {
                    upstream: Upstream::Business,
                    reason: e.to_string(),
                }
            })?;

        if !resp.status().is_success() {
            tracing::warn!("Business Service 返回 HTTP {}", resp.status());
            return Err(ServiceError::UpstreamFailure {
                upstream: Upstream::Business,
            });
        }

        let body = resp.json::<serde_json::Value>().await.map_err(|e| {
            tracing::warn!("Business Service 响应不是合法 JSON: {}", e);
            ServiceError::UpstreamFailure {
                upstream: Upstream::Business,
            }
        })?;

        if !body.is_object() {
            tracing::warn!("Business Service 响应不是 JSON 对象");
            return Err(ServiceError::UpstreamFailure {
                upstream: Upstream::Business,
            });
        }
        Ok(body)
    }

    /// POST {database}/write
    async fn save_record(&self, record: &Record) -> Result<(), ServiceError> {
        let resp = self
            .client
            .post(&self.write_url)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("连接 Database Service 失败: {}", e);
                ServiceError::UpstreamConnectivity {
                    upstream: Upstream::Database,
                    reason: e.to_string(),
                }
            })?;

        if !resp.status().is_success() {
            tracing::warn!("Database Service 返回 HTTP {}", resp.status());
            return Err(ServiceError::UpstreamFailure {
                upstream: Upstream::Database,
            });
        }

        tracing::info!(
            target_language = %record.target_language,
            detected_language = %record.detected_language,
            "翻译记录已保存"
        );
        Ok(())
    }
}
