//! Client Service
//!
//! 对外网关：校验 Bearer Token，调用 Business Service 翻译，
//! 再把结果写入 Database Service

mod handlers;
mod middleware;
mod router;
mod service;

pub use middleware::ClientState;
pub use router::create_client_router;
pub use service::TranslateService;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5000;
