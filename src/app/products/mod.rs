//! 产品：表单校验、创建表单与创建接口

pub mod form;
pub mod handler;
pub mod markup;
pub mod model;
pub mod schema;
pub mod service;
pub mod store;
