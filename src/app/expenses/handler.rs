//! 支出汇总处理器

use axum::{extract::State, Json};

use super::model::ExpenseByCategorySummary;
use crate::app::AppState;
use crate::core::error::CoreError;

pub const READ_FAILED: &str = "Error retrieving expenses by category";

pub async fn get_expenses_by_category(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseByCategorySummary>>, CoreError> {
    let summaries = state
        .expense_service
        .summaries_by_category()
        .await
        .map_err(|e| CoreError::storage(READ_FAILED, e))?;
    Ok(Json(summaries))
}
