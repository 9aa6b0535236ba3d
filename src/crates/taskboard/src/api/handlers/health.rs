//! Health check endpoint handler

use axum::{extract::State, http::StatusCode, Json};

use crate::api::{models::HealthResponse, routes::AppState};

/// Handler for GET /health
///
/// Reports database reachability plus pool usage; 503 when the store does
/// not answer. `database` is "unreachable" for connection or pool failures
/// and "error" when the store answered but the probe query failed.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let pool = app_state.store.pool_statistics();

    match app_state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::new("ok", "connected").with_pool(pool)),
        ),
        Err(e) => {
            let database = if e.is_connectivity() {
                "unreachable"
            } else {
                "error"
            };
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("error", database).with_pool(pool)),
            )
        }
    }
}
