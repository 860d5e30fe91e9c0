//! Business Service
//!
//! 文本规范化、语种识别，并调用外部翻译服务

pub mod detect;
mod handlers;
pub mod languages;
mod router;
mod service;
pub mod translator;

pub use router::{BusinessState, create_business_router};
pub use service::BusinessService;
pub use translator::GoogleTranslator;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5002;
