//! API error types and HTTP response conversion
//!
//! Errors render as short `text/plain` bodies. Store failures are reported to
//! the client with a generic message only; the underlying [`StoreError`] is
//! logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed a presence check or could not be read
    #[error("{0}")]
    Validation(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// The store failed; `message` is what the client sees
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure with the client-facing message for this operation
    pub fn store(message: &'static str, source: StoreError) -> Self {
        ApiError::Store { message, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code identifier
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Store { .. } => "STORE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Store { message, source } => {
                tracing::error!(code = self.code(), error = %source, "{}", message);
            }
            other => {
                tracing::warn!(code = self.code(), "{}", other);
            }
        }

        (status, self.to_string()).into_response()
    }
}
