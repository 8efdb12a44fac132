//! 支出汇总存储

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::model::ExpenseByCategory;
use crate::core::error::StorageError;

/// 读取全部分类汇总行，按日期倒序
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn expenses_by_category(&self) -> Result<Vec<ExpenseByCategory>, StorageError>;
}

#[derive(Clone, Default)]
pub struct MemoryExpenseStore {
    rows: Arc<RwLock<Vec<ExpenseByCategory>>>,
}

impl MemoryExpenseStore {
    pub fn new(rows: Vec<ExpenseByCategory>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub fn insert(&self, row: ExpenseByCategory) -> Result<(), StorageError> {
        self.rows
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?
            .push(row);
        Ok(())
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn expenses_by_category(&self) -> Result<Vec<ExpenseByCategory>, StorageError> {
        let mut rows = self
            .rows
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?
            .clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}

#[cfg(feature = "database")]
pub use postgres::PgExpenseStore;

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use sqlx::PgPool;

    pub struct PgExpenseStore {
        pool: PgPool,
    }

    impl PgExpenseStore {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    #[async_trait]
    impl ExpenseStore for PgExpenseStore {
        async fn expenses_by_category(&self) -> Result<Vec<ExpenseByCategory>, StorageError> {
            let rows = sqlx::query_as::<_, ExpenseByCategory>(
                r#"
                SELECT
                    "expenseByCategoryId" AS expense_by_category_id,
                    "expenseSummaryId" AS expense_summary_id,
                    "category" AS category,
                    "amount"::numeric AS amount,
                    "date" AT TIME ZONE 'UTC' AS date
                FROM "ExpenseByCategory"
                ORDER BY "date" DESC
                "#,
            )
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }
    }
}
