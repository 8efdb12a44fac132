//! # 库存管理服务
//!
//! 分层结构：
//! - `app`: 产品创建表单与接口、支出分类汇总接口
//! - `core`: 统一错误处理、请求日志中间件
//! - `infrastructure`: 数据库连接池、日志初始化
//! - `config`: TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use config::Config;
