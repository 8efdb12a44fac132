//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::model::ProductDraft;
use crate::app::AppState;
use crate::core::error::CoreError;

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductDraft>), CoreError> {
    let Json(draft) = payload.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
    let product = state.product_service.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
