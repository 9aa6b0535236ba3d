//! API middleware layer
//!
//! CORS, request logging and request validation helpers.

pub mod cors;
pub mod logging;
pub mod validation;

pub use cors::cors_layer;
pub use logging::logging_layer;
pub use validation::{json_body, non_empty, validate_not_empty, EMPTY_TASK_MESSAGE};
