//! To-do list routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use shelf_engine::{Record, RecordId};

use crate::error::Result;
use crate::handlers::{
    handle_create_task, handle_delete_task, handle_get_task, handle_list_tasks,
    handle_patch_task, handle_update_task, DeletedResponse,
};
use crate::AppState;

/// Create task routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_handler).post(create_handler))
        .route(
            "/tasks/{id}",
            get(show_handler)
                .put(update_handler)
                .patch(patch_handler)
                .delete(delete_handler),
        )
}

/// GET /tasks - List every task.
async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Record>>> {
    Ok(Json(handle_list_tasks(&state.tasks)?))
}

/// POST /tasks - Create a task.
async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>)> {
    let Json(payload) = body?;
    let task = handle_create_task(&state.tasks, payload)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id} - Fetch one task.
async fn show_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<RecordId>, PathRejection>,
) -> Result<Json<Record>> {
    let Path(id) = path?;
    Ok(Json(handle_get_task(&state.tasks, id)?))
}

/// PUT /tasks/{id} - Replace a task's fields.
async fn update_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<RecordId>, PathRejection>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>> {
    let Path(id) = path?;
    // A missing task outranks a malformed body
    handle_get_task(&state.tasks, id)?;
    let Json(payload) = body?;
    Ok(Json(handle_update_task(&state.tasks, id, payload)?))
}

/// PATCH /tasks/{id} - Merge fields into a task.
async fn patch_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<RecordId>, PathRejection>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>> {
    let Path(id) = path?;
    // A missing task outranks a malformed body
    handle_get_task(&state.tasks, id)?;
    let Json(payload) = body?;
    Ok(Json(handle_patch_task(&state.tasks, id, payload)?))
}

/// DELETE /tasks/{id} - Delete a task.
async fn delete_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<RecordId>, PathRejection>,
) -> Result<Json<DeletedResponse>> {
    let Path(id) = path?;
    Ok(Json(handle_delete_task(&state.tasks, id)?))
}
