//! API response helpers
//!
//! Success bodies are the bare JSON value (no envelope), matching what the
//! frontend expects.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::models::MessageResponse;

/// Create a 200 OK JSON response
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(data))
}

/// Create a 201 Created JSON response
pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(data))
}

/// Create a 200 OK `{"message": ...}` response
pub fn message(text: impl Into<String>) -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::new(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_created_is_unwrapped() {
        let response = created(serde_json::json!({"id": 7})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_of(response).await, serde_json::json!({"id": 7}));
    }

    #[tokio::test]
    async fn test_message_body() {
        let response = message("Task deleted").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({"message": "Task deleted"})
        );
    }
}
