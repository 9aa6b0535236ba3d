//! Request validation utilities
//!
//! Presence checks only: a field counts as missing when it is absent, null
//! or an empty string.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::error::{ApiError, ApiResult};

/// Message returned when a task body has no `task` text
pub const EMPTY_TASK_MESSAGE: &str = "Task content cannot be empty";

/// Require a present, non-empty string field
pub fn validate_not_empty(value: Option<String>, message: &str) -> ApiResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}

/// Treat an empty string the same as an absent field
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unwrap a JSON body, reporting unreadable bodies as a 400
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}
