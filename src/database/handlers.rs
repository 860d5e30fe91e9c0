//! Database Service HTTP 处理器

use axum::{Json, extract::State};

use crate::model::types::{ReadResponse, Record, WriteResponse};

use super::router::DatabaseState;

/// GET /
pub async fn index() -> Json<&'static str> {
    Json("Database Service: Store translation records.")
}

/// POST /write
/// 追加一条记录
pub async fn write_record(
    State(state): State<DatabaseState>,
    Json(record): Json<Record>,
) -> Json<WriteResponse> {
    let record = state.store.append(record);
    tracing::debug!(
        total = state.store.len(),
        target_language = %record.target_language,
        "记录已保存"
    );
    Json(WriteResponse {
        message: "Record saved.".to_string(),
        record,
    })
}

/// GET /read
/// 按写入顺序返回全部记录
pub async fn read_records(State(state): State<DatabaseState>) -> Json<ReadResponse> {
    Json(ReadResponse {
        records: state.store.snapshot(),
    })
}
