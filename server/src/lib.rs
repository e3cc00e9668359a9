//! Shelf Server - in-memory to-do list and product catalog over HTTP.
//!
//! The router is exposed as a library so integration tests can bind it to an
//! ephemeral port. The `shelf-server` binary wires it to configuration from
//! the environment.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod trace;

use std::sync::Arc;

use axum::Router;
use shelf_engine::{catalog, SharedStore};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::trace::{make_request_span, UuidRequestId, REQUEST_ID_HEADER};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub tasks: SharedStore,
    pub products: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh stores for the given configuration.
    pub fn new(config: Config) -> shelf_engine::error::Result<Self> {
        let products = if config.seed_products {
            catalog::product_store()?
        } else {
            catalog::empty_product_store()
        };

        Ok(Self {
            tasks: SharedStore::new(catalog::task_store()),
            products: SharedStore::new(products),
            config: Arc::new(config),
        })
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
