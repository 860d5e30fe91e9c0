//! Database Service
//!
//! 在进程内存中按写入顺序保存翻译记录，进程退出即丢失

mod handlers;
mod router;
pub mod store;

pub use router::{DatabaseState, create_database_router};
pub use store::RecordStore;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5003;
