//! 创建产品表单的 HTML 标记

use super::model::ProductField;
use super::schema::{FieldErrors, FormValues};

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const INPUT_CLASS: &str = "block w-full mb-2 p-2 border-gray-500 border-2 rounded-md";
const ERROR_CLASS: &str = "text-red-600 text-sm";

/// 转义用户可控文本
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_field(html: &mut String, field: ProductField, value: &str, error: Option<&str>) {
    let key = field.key();
    let input_type = if field.is_numeric() { "number" } else { "text" };

    html.push_str(&format!(
        r#"<label for="{key}" class="{LABEL_CLASS}">{label}</label><input type="{input_type}" id="{key}" name="{key}" placeholder="{placeholder}" value="{value}" class="{INPUT_CLASS}"/>"#,
        label = field.label(),
        placeholder = field.placeholder(),
        value = escape(value),
    ));
    if let Some(message) = error {
        html.push_str(&format!(r#"<p class="{ERROR_CLASS}">{}</p>"#, escape(message)));
    }
}

/// 渲染覆盖层表单，每个字段的错误紧跟在输入框之后
pub fn render_modal(values: &FormValues, errors: &FieldErrors) -> String {
    let mut html = String::from(
        r#"<div class="fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-20"><div class="relative top-20 mx-auto p-5 border w-96 shadow-lg rounded-md bg-white"><h1 class="text-2xl font-semibold text-gray-700">Create New Product</h1><form class="mt-5">"#,
    );

    for field in ProductField::ALL {
        render_field(&mut html, field, values.get(field), errors.get(field));
    }

    html.push_str(
        r#"<button type="submit" class="mt-4 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-700">Create</button><button type="button" class="ml-2 px-4 py-2 bg-gray-500 text-white rounded hover:bg-gray-700">Cancel</button></form></div></div>"#,
    );
    html
}
