//! 支出汇总业务服务

use std::sync::Arc;
use tracing::debug;

use super::model::ExpenseByCategorySummary;
use super::store::ExpenseStore;
use crate::core::error::StorageError;

#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// 全部汇总行，日期倒序，金额转为字符串。读取失败时不返回部分结果。
    pub async fn summaries_by_category(&self) -> Result<Vec<ExpenseByCategorySummary>, StorageError> {
        let mut rows = self.store.expenses_by_category().await?;
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(rows = rows.len(), "loaded expense summaries");

        Ok(rows.into_iter().map(ExpenseByCategorySummary::from).collect())
    }
}
