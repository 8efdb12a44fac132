//! 新产品校验规则
//!
//! 表单文本先按数值字段转换，再交给 [`NewProduct`] 的派生规则校验。
//! 每个字段只保留第一条错误信息。

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::model::{NewProduct, ProductField};

/// 数值字段无法解析时的提示
pub use super::model::NOT_A_NUMBER;

/// 表单中的原始文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub price: String,
    pub stock_quantity: String,
    pub rating: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            stock_quantity: "0".to_string(),
            rating: "0".to_string(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Price => &self.price,
            ProductField::StockQuantity => &self.stock_quantity,
            ProductField::Rating => &self.rating,
        }
    }

    pub fn set(&mut self, field: ProductField, text: impl Into<String>) {
        let slot = match field {
            ProductField::Name => &mut self.name,
            ProductField::Price => &mut self.price,
            ProductField::StockQuantity => &mut self.stock_quantity,
            ProductField::Rating => &mut self.rating,
        };
        *slot = text.into();
    }
}

/// 字段级错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProductField, String>);

impl FieldErrors {
    /// 已有信息的字段不会被覆盖
    pub fn insert(&mut self, field: ProductField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn merge(&mut self, errors: &ValidationErrors) {
        for (key, kind) in errors.errors() {
            let Some(field) = ProductField::from_key(key) else {
                continue;
            };
            if let ValidationErrorsKind::Field(list) = kind {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field.key()));
                    self.insert(field, message);
                }
            }
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::default();
        field_errors.merge(&errors);
        field_errors
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(field, message)| (field.key(), message)))
    }
}

/// 数值转换：空白、非数字及非有限值都视为 NaN
fn coerce_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 校验表单文本，成功时返回类型化记录
pub fn parse(values: &FormValues) -> Result<NewProduct, FieldErrors> {
    let mut errors = FieldErrors::default();

    let mut number = |field: ProductField| match coerce_number(values.get(field)) {
        Some(value) => value,
        None => {
            errors.insert(field, NOT_A_NUMBER);
            f64::NAN
        }
    };

    let candidate = NewProduct {
        name: values.name.clone(),
        price: number(ProductField::Price),
        stock_quantity: number(ProductField::StockQuantity),
        rating: number(ProductField::Rating),
    };

    if let Err(validation) = candidate.validate() {
        errors.merge(&validation);
    }

    if errors.is_empty() {
        Ok(candidate)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, price: &str, stock: &str, rating: &str) -> FormValues {
        FormValues {
            name: name.to_string(),
            price: price.to_string(),
            stock_quantity: stock.to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn test_valid_values() {
        let product = parse(&values("Widget", "9.99", "10", "4")).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.stock_quantity, 10.0);
        assert_eq!(product.rating, 4.0);
    }

    #[test]
    fn test_empty_name() {
        let errors = parse(&values("", "9.99", "10", "4")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ProductField::Name),
            Some("Product name is required")
        );
    }

    #[test]
    fn test_price_minimum() {
        for price in ["0", "0.009", "-3"] {
            let errors = parse(&values("Widget", price, "10", "4")).unwrap_err();
            assert_eq!(
                errors.get(ProductField::Price),
                Some("Price must be at least 0.01"),
                "price {}",
                price
            );
        }
        assert!(parse(&values("Widget", "0.01", "10", "4")).is_ok());
    }

    #[test]
    fn test_negative_stock() {
        let errors = parse(&values("Widget", "1", "-1", "4")).unwrap_err();
        assert_eq!(
            errors.get(ProductField::StockQuantity),
            Some("Stock quantity must be a positive number")
        );
        assert!(parse(&values("Widget", "1", "0", "4")).is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        let errors = parse(&values("Widget", "1", "1", "5.1")).unwrap_err();
        assert_eq!(errors.get(ProductField::Rating), Some("Rating can't exceed 5"));

        let errors = parse(&values("Widget", "1", "1", "-1")).unwrap_err();
        assert_eq!(
            errors.get(ProductField::Rating),
            Some("Rating must be at least 0")
        );
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        for text in ["", "  ", "abc", "NaN", "inf", "1e999"] {
            let errors = parse(&values("Widget", text, "1", "1")).unwrap_err();
            assert_eq!(errors.get(ProductField::Price), Some(NOT_A_NUMBER), "text {:?}", text);
        }
    }

    #[test]
    fn test_all_fields_reported_in_one_pass() {
        let errors = parse(&values("", "abc", "-2", "9")).unwrap_err();
        assert_eq!(errors.len(), 4);
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ProductField::ALL.to_vec());
        assert_eq!(errors.get(ProductField::Price), Some(NOT_A_NUMBER));
    }

    #[test]
    fn test_numeric_text_is_trimmed() {
        let product = parse(&values("Widget", " 2.50 ", "\t3", "0")).unwrap();
        assert_eq!(product.price, 2.5);
        assert_eq!(product.stock_quantity, 3.0);
    }

    #[test]
    fn test_field_errors_serialize_with_json_keys() {
        let errors = parse(&values("Widget", "1", "-1", "1")).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "stockQuantity": "Stock quantity must be a positive number" })
        );
    }
}
