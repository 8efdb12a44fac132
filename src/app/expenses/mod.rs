//! 支出：按分类汇总的读取接口

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
