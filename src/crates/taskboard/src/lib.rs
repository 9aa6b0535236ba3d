//! Task tracking backend
//!
//! This crate exposes CRUD operations over a single relational `Tasks` table
//! as a JSON HTTP API, and serves a static browser frontend for every path
//! the API does not claim.
//!
//! - [`config`]: command-line and environment configuration
//! - [`db`]: connection pool, task repository and the [`db::TaskStore`] seam
//! - [`api`]: axum handlers, routing and error mapping

pub mod api;
pub mod config;
pub mod db;
pub mod version;

pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use db::{DatabaseConnection, PgTaskStore, StoreError, TaskStore};
