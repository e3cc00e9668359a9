//! Admin endpoint guarded by the `key` query parameter.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::auth::AdminQueryKey;
use crate::AppState;

#[derive(Serialize)]
pub struct AdminResponse {
    pub message: String,
}

/// Create admin routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin", get(admin_handler))
}

/// GET /admin - 401 without a key, 403 with the wrong one.
async fn admin_handler(_admin: AdminQueryKey) -> Json<AdminResponse> {
    Json(AdminResponse {
        message: "Access granted".to_string(),
    })
}
