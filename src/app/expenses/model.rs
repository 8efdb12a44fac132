//! 支出分类汇总数据模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 存储中的汇总行
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct ExpenseByCategory {
    pub expense_by_category_id: String,
    pub expense_summary_id: String,
    pub category: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// 传输用汇总行，金额以字符串表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseByCategorySummary {
    pub expense_by_category_id: String,
    pub expense_summary_id: String,
    pub category: String,
    pub amount: String,
    pub date: DateTime<Utc>,
}

impl From<ExpenseByCategory> for ExpenseByCategorySummary {
    fn from(row: ExpenseByCategory) -> Self {
        Self {
            expense_by_category_id: row.expense_by_category_id,
            expense_summary_id: row.expense_summary_id,
            category: row.category,
            // 去掉尾随零：150.50 -> "150.5"
            amount: row.amount.normalize().to_string(),
            date: row.date,
        }
    }
}
