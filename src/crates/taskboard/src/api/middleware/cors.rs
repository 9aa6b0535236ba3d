//! CORS middleware configuration

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Allow any origin to call the task API
///
/// The frontend may be served from a dev server on another port, so origins
/// are not restricted; methods are limited to those the routes use.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
