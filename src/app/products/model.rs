//! 产品数据模型

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 新产品记录（不含标识符）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(
        range(min = 0.01, message = "Price must be at least 0.01"),
        custom(function = "validate_finite")
    )]
    pub price: f64,

    #[validate(
        range(min = 0.0, message = "Stock quantity must be a positive number"),
        custom(function = "validate_finite")
    )]
    pub stock_quantity: f64,

    #[validate(
        range(min = 0.0, message = "Rating must be at least 0"),
        custom(function = "validate_rating_ceiling")
    )]
    pub rating: f64,
}

pub const MAX_RATING: f64 = 5.0;

pub const NOT_A_NUMBER: &str = "Expected number, received nan";

pub const STOCK_NOT_WHOLE: &str = "Stock quantity must be a whole number";

impl NewProduct {
    /// 库存以整数保存；小数、NaN 或超出 i32 的值返回 None
    pub fn stock_units(&self) -> Option<i32> {
        let stock = self.stock_quantity;
        if stock.fract() == 0.0 && (0.0..=i32::MAX as f64).contains(&stock) {
            Some(stock as i32)
        } else {
            None
        }
    }
}

fn message(code: &'static str, text: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(text));
    err
}

// range 对 NaN 的比较恒为 false，需要单独拦截
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(message("finite", NOT_A_NUMBER));
    }
    Ok(())
}

fn validate_rating_ceiling(rating: f64) -> Result<(), ValidationError> {
    validate_finite(rating)?;
    if rating > MAX_RATING {
        return Err(message("range", "Rating can't exceed 5"));
    }
    Ok(())
}

/// 提交给创建回调的完整产品草稿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_id: Uuid,
    #[serde(flatten)]
    pub product: NewProduct,
}

impl ProductDraft {
    /// 为已校验的记录生成新的 v4 标识符
    pub fn new(product: NewProduct) -> Self {
        Self {
            product_id: Uuid::new_v4(),
            product,
        }
    }
}

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Price,
    StockQuantity,
    Rating,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::StockQuantity,
        ProductField::Rating,
    ];

    /// 表单与 JSON 中使用的键
    pub fn key(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::StockQuantity => "stockQuantity",
            ProductField::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductField::Name => "Product Name",
            ProductField::Price => "Price",
            ProductField::StockQuantity => "Stock Quantity",
            ProductField::Rating => "Rating",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            other => other.label(),
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, ProductField::Name)
    }

    /// 同时接受 JSON 键和 Rust 字段名
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ProductField::Name),
            "price" => Some(ProductField::Price),
            "stockQuantity" | "stock_quantity" => Some(ProductField::StockQuantity),
            "rating" => Some(ProductField::Rating),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            stock_quantity: 10.0,
            rating: 4.0,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn test_rating_bounds_report_distinct_messages() {
        let mut product = widget();
        product.rating = 5.5;
        let errors = product.validate().unwrap_err();
        let messages = errors.field_errors();
        let rating = messages.values().next().unwrap();
        assert_eq!(
            rating[0].message.as_deref(),
            Some("Rating can't exceed 5")
        );

        product.rating = -0.5;
        let errors = product.validate().unwrap_err();
        let messages = errors.field_errors();
        let rating = messages.values().next().unwrap();
        assert_eq!(rating.len(), 1);
        assert_eq!(
            rating[0].message.as_deref(),
            Some("Rating must be at least 0")
        );
    }

    #[test]
    fn test_rating_edges_are_inclusive() {
        let mut product = widget();
        product.rating = 0.0;
        assert!(product.validate().is_ok());
        product.rating = MAX_RATING;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_non_finite_numbers_fail_validation() {
        for value in [f64::NAN, f64::INFINITY] {
            let mut product = widget();
            product.price = value;
            let errors = product.validate().unwrap_err();
            assert_eq!(
                errors.field_errors()["price"][0].message.as_deref(),
                Some(NOT_A_NUMBER)
            );

            let mut product = widget();
            product.stock_quantity = value;
            let errors = product.validate().unwrap_err();
            assert_eq!(
                errors.field_errors()["stock_quantity"][0].message.as_deref(),
                Some(NOT_A_NUMBER)
            );

            let mut product = widget();
            product.rating = value;
            let errors = product.validate().unwrap_err();
            assert_eq!(
                errors.field_errors()["rating"][0].message.as_deref(),
                Some(NOT_A_NUMBER)
            );
        }
    }

    #[test]
    fn test_stock_units() {
        let mut product = widget();
        assert_eq!(product.stock_units(), Some(10));

        product.stock_quantity = 0.0;
        assert_eq!(product.stock_units(), Some(0));

        product.stock_quantity = i32::MAX as f64;
        assert_eq!(product.stock_units(), Some(i32::MAX));

        for stock in [3.5, 1e12, f64::NAN, f64::INFINITY, -1.0] {
            product.stock_quantity = stock;
            assert_eq!(product.stock_units(), None, "stock {}", stock);
        }
    }

    #[test]
    fn test_draft_serializes_flat_camel_case() {
        let draft = ProductDraft::new(widget());
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["productId"], draft.product_id.to_string());
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["stockQuantity"], 10.0);
        assert_eq!(json["rating"], 4.0);
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_draft_ids_are_fresh_v4() {
        let a = ProductDraft::new(widget());
        let b = ProductDraft::new(widget());
        assert_ne!(a.product_id, b.product_id);
        assert_eq!(a.product_id.get_version_num(), 4);
    }

    #[test]
    fn test_draft_rejects_malformed_id() {
        let result: Result<ProductDraft, _> = serde_json::from_value(serde_json::json!({
            "productId": "not-a-uuid",
            "name": "Widget",
            "price": 9.99,
            "stockQuantity": 10,
            "rating": 4
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_field_keys() {
        for field in ProductField::ALL {
            assert_eq!(ProductField::from_key(field.key()), Some(field));
        }
        assert_eq!(
            ProductField::from_key("stock_quantity"),
            Some(ProductField::StockQuantity)
        );
        assert_eq!(ProductField::from_key("productId"), None);
    }
}
