//! Shelf Server binary.

use shelf_server::{app, config::Config, trace, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    trace::init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Shelf Server on {}:{}", config.host, config.port);
    if config.admin_key.is_none() {
        tracing::warn!("ADMIN_KEY is empty, admin endpoints are open");
    }

    let addr = config.bind_addr();
    let state = AppState::new(config)?;
    tracing::info!(
        products = state.products.len()?,
        "Catalog ready"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
