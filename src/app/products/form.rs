//! 创建产品表单
//!
//! 表单本身不保存可见性，由宿主页面在渲染时传入。提交成功时依次调用
//! `on_create` 和 `on_close` 各一次；校验失败时两者都不调用。

use tracing::{debug, info};
use uuid::Uuid;

use super::markup;
use super::model::{ProductDraft, ProductField};
use super::schema::{self, FieldErrors, FormValues};

/// 表单当前阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Invalid,
    Submitted,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Uuid),
    Invalid(FieldErrors),
}

pub struct CreateProductModal<C, X>
where
    C: FnMut(ProductDraft),
    X: FnMut(),
{
    on_create: C,
    on_close: X,
    values: FormValues,
    errors: FieldErrors,
    phase: FormPhase,
}

impl<C, X> CreateProductModal<C, X>
where
    C: FnMut(ProductDraft),
    X: FnMut(),
{
    pub fn new(on_create: C, on_close: X) -> Self {
        Self {
            on_create,
            on_close,
            values: FormValues::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn set_value(&mut self, field: ProductField, text: impl Into<String>) {
        self.values.set(field, text);
        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn value(&self, field: ProductField) -> &str {
        self.values.get(field)
    }

    /// 最近一次提交留下的错误
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Validating;

        match schema::parse(&self.values) {
            Ok(product) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitted;

                let draft = ProductDraft::new(product);
                let product_id = draft.product_id;
                info!(product_id = %product_id, name = %draft.product.name, "product draft submitted");

                (self.on_create)(draft);
                (self.on_close)();
                SubmitOutcome::Submitted(product_id)
            }
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "product form rejected");
                self.errors = errors.clone();
                self.phase = FormPhase::Invalid;
                SubmitOutcome::Invalid(errors)
            }
        }
    }

    pub fn cancel(&mut self) {
        (self.on_close)();
    }

    /// 关闭时不产生任何标记
    pub fn render(&self, is_open: bool) -> Option<String> {
        is_open.then(|| markup::render_modal(&self.values, &self.errors))
    }
}
