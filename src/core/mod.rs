//! 核心层：统一错误处理与中间件

pub mod error;
pub mod middleware;
