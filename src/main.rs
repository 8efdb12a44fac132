use std::sync::Arc;

use inventory_management::{
    app::{self, expenses::store::PgExpenseStore, products::store::PgProductStore, AppState},
    config,
    infrastructure::{database::DatabaseManager, logger::Logger},
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("Starting inventory server...");

    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    let pool = db.get_pool().clone();

    let state = AppState::new(
        Arc::new(PgExpenseStore::new(pool.clone())),
        Arc::new(PgProductStore::new(pool)),
    );
    let app = app::router(state, &config.http);

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Inventory server running on http://{}", addr);
    info!("   GET    /health    - Health check");
    info!("   GET    /expenses  - Expenses by category");
    info!("   POST   /products  - Create product");

    axum::serve(listener, app).await?;

    Ok(())
}
