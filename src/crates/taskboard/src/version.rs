//! Build metadata reported by the health endpoint and database sessions

/// Crate version, as reported by `GET /health`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, used as the PostgreSQL `application_name`
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
