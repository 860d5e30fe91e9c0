//! Database Service 路由

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::common::handlers::health;

use super::handlers::{index, read_records, write_record};
use super::store::RecordStore;

/// Database Service 共享状态
#[derive(Clone)]
pub struct DatabaseState {
    pub store: Arc<RecordStore>,
}

impl DatabaseState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// 创建 Database Service 路由
///
/// # 端点
/// - `GET /` - 服务说明
/// - `GET /health` - 健康检查
/// - `POST /write` - 追加记录
/// - `GET /read` - 读取全部记录
pub fn create_database_router(state: DatabaseState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/write", post(write_record))
        .route("/read", get(read_records))
        .with_state(state)
}
