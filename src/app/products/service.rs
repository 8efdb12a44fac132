//! 产品业务服务

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use super::model::{ProductDraft, ProductField, STOCK_NOT_WHOLE};
use super::schema::FieldErrors;
use super::store::ProductStore;
use crate::core::error::{CoreError, StorageError};

pub const CREATE_FAILED: &str = "Error creating product";

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 按表单规则复核后写入存储
    pub async fn create_product(&self, draft: ProductDraft) -> Result<ProductDraft, CoreError> {
        draft
            .product
            .validate()
            .map_err(|errors| CoreError::Validation(FieldErrors::from(errors)))?;

        // 存储列为整数，拒绝会被截断的库存
        if draft.product.stock_units().is_none() {
            let mut errors = FieldErrors::default();
            errors.insert(ProductField::StockQuantity, STOCK_NOT_WHOLE);
            return Err(CoreError::Validation(errors));
        }

        self.store
            .insert(&draft)
            .await
            .map_err(|e: StorageError| CoreError::storage(CREATE_FAILED, e))?;

        info!("Created product: {} ({})", draft.product.name, draft.product_id);
        Ok(draft)
    }
}
