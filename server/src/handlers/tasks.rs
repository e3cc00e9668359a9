//! Task handlers - the to-do list CRUD operations.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use shelf_engine::{Error, Record, RecordId, SharedStore};

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: RecordId,
}

/// Return every task in insertion order.
pub fn handle_list_tasks(tasks: &SharedStore) -> Result<Vec<Record>> {
    Ok(tasks.list()?)
}

/// Create a task from a decoded JSON body.
pub fn handle_create_task(tasks: &SharedStore, payload: Value) -> Result<Record> {
    let task = tasks.create(payload)?;
    tracing::info!(task_id = task.id, "Task created");
    Ok(task)
}

/// Fetch a single task.
pub fn handle_get_task(tasks: &SharedStore, id: RecordId) -> Result<Record> {
    tasks.find(id)?.ok_or_else(|| Error::RecordNotFound(id).into())
}

/// Replace a task's fields with the caller's payload.
pub fn handle_update_task(tasks: &SharedStore, id: RecordId, payload: Value) -> Result<Record> {
    let task = tasks.update(id, payload)?;
    tracing::info!(task_id = id, "Task updated");
    Ok(task)
}

/// Merge the caller's payload into a task.
pub fn handle_patch_task(tasks: &SharedStore, id: RecordId, payload: Value) -> Result<Record> {
    let task = tasks.patch(id, payload)?;
    tracing::info!(task_id = id, "Task patched");
    Ok(task)
}

/// Delete a task.
pub fn handle_delete_task(tasks: &SharedStore, id: RecordId) -> Result<DeletedResponse> {
    tasks.delete(id)?;
    tracing::info!(task_id = id, "Task deleted");
    Ok(DeletedResponse {
        message: "Task deleted".to_string(),
        id,
    })
}
