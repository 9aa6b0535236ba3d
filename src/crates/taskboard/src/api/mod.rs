//! REST API layer
//!
//! Provides the HTTP endpoints:
//! - Task CRUD operations
//! - Health check
//! - Static frontend catch-all

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{create_api_router, create_router, AppState};
