//! Product catalog routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use shelf_engine::{Record, RecordId};

use crate::auth::AdminHeaderKey;
use crate::error::Result;
use crate::handlers::{
    handle_create_product, handle_delete_product, handle_filter_products, handle_get_product,
    ProductQuery,
};
use crate::AppState;

/// Create product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(filter_handler).post(create_handler))
        .route("/products/{id}", get(show_handler).delete(delete_handler))
        .route("/product/{id}", get(show_handler))
}

/// GET /products - Filter the catalog by query parameters.
async fn filter_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Record>>> {
    let Query(pairs) = query?;
    let query = ProductQuery::from_pairs(pairs);
    Ok(Json(handle_filter_products(&state.products, &query)?))
}

/// GET /products/{id} - Fetch one product.
async fn show_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<RecordId>, PathRejection>,
) -> Result<Json<Record>> {
    let Path(id) = path?;
    Ok(Json(handle_get_product(&state.products, id)?))
}

/// POST /products - Add a product (admin only).
async fn create_handler(
    State(state): State<AppState>,
    _admin: AdminHeaderKey,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>)> {
    let Json(payload) = body?;
    let product = handle_create_product(&state.products, payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /products/{id} - Remove a product (admin only).
async fn delete_handler(
    State(state): State<AppState>,
    _admin: AdminHeaderKey,
    path: std::result::Result<Path<RecordId>, PathRejection>,
) -> Result<Json<Record>> {
    let Path(id) = path?;
    Ok(Json(handle_delete_product(&state.products, id)?))
}
