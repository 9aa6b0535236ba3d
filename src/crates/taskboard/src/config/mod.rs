//! Configuration module for taskboard
//!
//! Server, database and task-default settings, parsed from flags or the
//! environment.

pub mod server;

pub use server::{DatabaseConfig, ListenConfig, ServerConfig, ServerConfigError, TaskDefaults};
