//! HTTP route definitions.

mod admin;
mod health;
mod products;
mod tasks;

use crate::error::AppError;
use crate::AppState;
use axum::{http::Uri, Router};

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(tasks::routes())
        .merge(products::routes())
        .merge(admin::routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}
