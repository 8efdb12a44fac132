#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use inventory_management::{
    app::{
        expenses::{
            model::ExpenseByCategory,
            store::{ExpenseStore, MemoryExpenseStore},
        },
        products::{
            model::ProductDraft,
            store::{MemoryProductStore, ProductStore},
        },
    },
    config::HttpConfig,
    core::error::StorageError,
    router, AppState,
};

/// 总是失败的存储
pub struct BrokenStore;

#[async_trait]
impl ExpenseStore for BrokenStore {
    async fn expenses_by_category(&self) -> Result<Vec<ExpenseByCategory>, StorageError> {
        Err(StorageError::Unavailable("connection reset by peer".to_string()))
    }
}

#[async_trait]
impl ProductStore for BrokenStore {
    async fn insert(&self, _draft: &ProductDraft) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk full".to_string()))
    }
}

pub fn expense(id: &str, category: &str, date: &str, amount: Decimal) -> ExpenseByCategory {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    ExpenseByCategory {
        expense_by_category_id: id.to_string(),
        expense_summary_id: "summary-1".to_string(),
        category: category.to_string(),
        amount,
        date: Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap()),
    }
}

pub fn server(expenses: Arc<dyn ExpenseStore>, products: Arc<dyn ProductStore>) -> TestServer {
    let app = router(AppState::new(expenses, products), &HttpConfig::default());
    TestServer::new(app).unwrap()
}

pub fn memory_server(rows: Vec<ExpenseByCategory>) -> (TestServer, MemoryProductStore) {
    let products = MemoryProductStore::new();
    let server = server(
        Arc::new(MemoryExpenseStore::new(rows)),
        Arc::new(products.clone()),
    );
    (server, products)
}
