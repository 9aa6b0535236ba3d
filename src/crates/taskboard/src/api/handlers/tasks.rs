//! Task CRUD endpoint handlers
//!
//! Each handler checks its input, issues one store call and maps the result.
//! Store failures become a generic 500 through [`ApiError::store`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware::validation::json_body,
    models::TaskPayload,
    response,
    routes::AppState,
};

const FETCH_TASKS_FAILED: &str = "Server error while fetching tasks";
const FETCH_TASK_FAILED: &str = "Server error while fetching the task";
const ADD_TASK_FAILED: &str = "Server error while adding a task";
const UPDATE_TASK_FAILED: &str = "Server error while updating the task";
const DELETE_TASK_FAILED: &str = "Server error while deleting a task";

pub const TASK_UPDATED: &str = "Task updated";
pub const TASK_DELETED: &str = "Task deleted";

/// List all tasks
///
/// GET /tasks
pub async fn list_tasks(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let tasks = app_state
        .store
        .list_tasks()
        .await
        .map_err(|e| ApiError::store(FETCH_TASKS_FAILED, e))?;

    tracing::debug!("Listed {} tasks", tasks.len());
    Ok(response::ok(tasks))
}

/// Get a single task by ID
///
/// GET /tasks/:id
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    let task = app_state
        .store
        .get_task(id)
        .await
        .map_err(|e| ApiError::store(FETCH_TASK_FAILED, e))?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(response::ok(task))
}

/// Create a new task
///
/// POST /tasks
pub async fn create_task(
    State(app_state): State<AppState>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_task = json_body(body)?.into_new_task(&app_state.defaults)?;

    let created = app_state
        .store
        .create_task(new_task)
        .await
        .map_err(|e| ApiError::store(ADD_TASK_FAILED, e))?;

    tracing::info!("Created task: {}", created.id);
    Ok(response::created(created))
}

/// Overwrite an existing task
///
/// PUT /tasks/:id
///
/// An unknown ID is not an error: nothing changes and the usual confirmation
/// is returned.
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let changes = json_body(body)?.into_changes()?;

    let affected = app_state
        .store
        .update_task(id, changes)
        .await
        .map_err(|e| ApiError::store(UPDATE_TASK_FAILED, e))?;

    if affected == 0 {
        tracing::warn!("Update matched no task: {}", id);
    } else {
        tracing::info!("Updated task: {}", id);
    }
    Ok(response::message(TASK_UPDATED))
}

/// Delete a task
///
/// DELETE /tasks/:id
///
/// Idempotent: deleting an unknown ID still succeeds.
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    let affected = app_state
        .store
        .delete_task(id)
        .await
        .map_err(|e| ApiError::store(DELETE_TASK_FAILED, e))?;

    if affected == 0 {
        tracing::warn!("Delete matched no task: {}", id);
    } else {
        tracing::info!("Deleted task: {}", id);
    }
    Ok(response::message(TASK_DELETED))
}
