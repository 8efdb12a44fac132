//! 产品存储

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::model::ProductDraft;
use crate::core::error::StorageError;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, draft: &ProductDraft) -> Result<(), StorageError>;
}

/// 内存存储，按插入顺序保存
#[derive(Clone, Default)]
pub struct MemoryProductStore {
    products: Arc<Mutex<Vec<ProductDraft>>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> Vec<ProductDraft> {
        self.products
            .lock()
            .map(|products| products.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, draft: &ProductDraft) -> Result<(), StorageError> {
        let mut products = self
            .products
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        products.push(draft.clone());
        Ok(())
    }
}

#[cfg(feature = "database")]
pub use postgres::PgProductStore;

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use sqlx::PgPool;

    pub struct PgProductStore {
        pool: PgPool,
    }

    impl PgProductStore {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    #[async_trait]
    impl ProductStore for PgProductStore {
        async fn insert(&self, draft: &ProductDraft) -> Result<(), StorageError> {
            let stock = draft.product.stock_units().ok_or_else(|| {
                StorageError::Unavailable(format!(
                    "stock quantity {} does not fit an integer column",
                    draft.product.stock_quantity
                ))
            })?;

            sqlx::query(
                r#"INSERT INTO "Products" ("productId", "name", "price", "rating", "stockQuantity")
                   VALUES ($1, $2, $3, $4, $5)"#,
            )
            .bind(draft.product_id.to_string())
            .bind(&draft.product.name)
            .bind(draft.product.price)
            .bind(draft.product.rating)
            .bind(stock)
            .execute(&self.pool)
            .await?;
            Ok(())
        }
    }
}
