//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::app::products::schema::FieldErrors;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    Validation(FieldErrors),
    /// `message` 是返回给客户端的固定文本，`source` 只写日志
    Storage {
        message: &'static str,
        source: StorageError,
    },
}

impl CoreError {
    pub fn storage(message: &'static str, source: StorageError) -> Self {
        CoreError::Storage { message, source }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CoreError::BadRequest(msg) => {
                warn!("Rejected malformed request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            CoreError::Validation(errors) => {
                warn!("Rejected request with {} invalid field(s)", errors.len());
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        message: "Validation failed".to_string(),
                        errors: Some(errors),
                    },
                )
            }
            CoreError::Storage { message, source } => {
                error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(message))
            }
        };

        (status, Json(body)).into_response()
    }
}
