//! Database module for taskboard
//!
//! Provides the connection pool, the `Tasks` row model, the repository of
//! parameterised statements, and the [`TaskStore`] seam the HTTP layer uses.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use connection::{DatabaseConnection, DatabasePool, PoolStatistics};
pub use error::{StoreError, StoreResult};
pub use store::{PgTaskStore, TaskStore};
