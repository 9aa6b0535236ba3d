//! API route definitions
//!
//! Task routes are mounted at both `/tasks` and `/api/tasks`. Anything no
//! route claims is served from the static frontend directory, falling back to
//! its `index.html`.

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{handlers, middleware};
use crate::config::TaskDefaults;
use crate::db::TaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
    pub defaults: Arc<TaskDefaults>,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>, defaults: TaskDefaults) -> Self {
        Self {
            store,
            defaults: Arc::new(defaults),
        }
    }
}

/// Task CRUD routes, relative to their mount point
fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
}

/// Build the API router without the static fallback
pub fn create_api_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(task_routes())
        .nest("/api", task_routes())
        .with_state(app_state)
}

/// Build the complete application: API, static frontend, CORS and request tracing
pub fn create_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    create_api_router(app_state)
        .fallback_service(frontend)
        .layer(middleware::cors_layer())
        .layer(middleware::logging_layer())
}
