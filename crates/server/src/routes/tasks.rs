//! Shift task endpoints.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;

use barback_core::ShiftTaskId;

use crate::db::ShiftTaskRepository;
use crate::error::Result;
use crate::models::ShiftTask;
use crate::state::AppState;

/// One shift task on the wire.
#[derive(Debug, Serialize)]
pub struct ShiftTaskResponse {
    pub id: ShiftTaskId,
    pub shift_name: String,
    /// Checklist payload exactly as it was stored.
    pub checklist: Value,
}

impl From<ShiftTask> for ShiftTaskResponse {
    fn from(task: ShiftTask) -> Self {
        Self {
            id: task.id,
            shift_name: task.shift_name,
            checklist: task.checklist,
        }
    }
}

/// List all shift tasks in insertion order.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ShiftTaskResponse>>> {
    let tasks = ShiftTaskRepository::new(state.pool()).list().await?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}
