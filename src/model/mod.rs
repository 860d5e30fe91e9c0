//! 配置与数据模型

pub mod config;
pub mod types;
