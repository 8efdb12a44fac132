//! 创建产品表单演示
//! 在终端中充当宿主页面：填写字段、提交，并打印创建回调收到的草稿

use std::cell::{Cell, RefCell};
use std::env;

use inventory_management::app::products::{
    form::{CreateProductModal, SubmitOutcome},
    model::{ProductDraft, ProductField},
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    // 宿主页面持有可见性与创建结果
    let is_open = Cell::new(true);
    let created: RefCell<Vec<ProductDraft>> = RefCell::new(Vec::new());

    let mut form = CreateProductModal::new(
        |draft| created.borrow_mut().push(draft),
        || is_open.set(false),
    );

    let texts = args.iter().filter(|arg| !arg.starts_with("--"));
    for (field, text) in ProductField::ALL.into_iter().zip(texts) {
        form.set_value(field, text.as_str());
    }

    if args.iter().any(|arg| arg == "--cancel") {
        form.cancel();
        println!("已取消，表单可见: {}", is_open.get());
        return Ok(());
    }

    match form.submit() {
        SubmitOutcome::Submitted(product_id) => {
            println!("✅ 产品草稿已提交: {}", product_id);
            for draft in created.borrow().iter() {
                println!("{}", serde_json::to_string_pretty(draft)?);
            }
        }
        SubmitOutcome::Invalid(errors) => {
            println!("❌ 校验失败:");
            for (field, message) in errors.iter() {
                println!("   {:<14} {}", field.key(), message);
            }
        }
    }

    match form.render(is_open.get()) {
        Some(html) => println!("\n{}", html),
        None => println!("\n表单已关闭"),
    }

    Ok(())
}

fn print_usage() {
    println!("用法: cargo run --bin create_product_demo -- <name> <price> <stockQuantity> <rating> [--cancel]");
    println!();
    println!("示例:");
    println!("  cargo run --bin create_product_demo -- Widget 9.99 10 4");
    println!("  cargo run --bin create_product_demo -- \"\" 0 -1 7");
}
