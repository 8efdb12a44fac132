//! 应用层

pub mod expenses;
pub mod products;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;
use expenses::{service::ExpenseService, store::ExpenseStore};
use products::{service::ProductService, store::ProductStore};

#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(expense_store: Arc<dyn ExpenseStore>, product_store: Arc<dyn ProductStore>) -> Self {
        Self {
            expense_service: ExpenseService::new(expense_store),
            product_service: ProductService::new(product_store),
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 创建路由
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/expenses", get(expenses::handler::get_expenses_by_category))
        .route("/products", post(products::handler::create_product))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
