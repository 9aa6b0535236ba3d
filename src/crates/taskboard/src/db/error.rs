//! Store error types
//!
//! Every failure talking to the database surfaces as a [`StoreError`]. sqlx
//! errors are classified on conversion so callers can tell connectivity
//! problems from query problems when logging.

use thiserror::Error;

/// Error returned by every store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach or authenticate against the database
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Pool exhausted or closed
    #[error("Connection pool error: {0}")]
    Pool(String),

    /// Statement rejected or failed while executing
    #[error("Query error: {0}")]
    Query(String),

    /// Result set did not match the row model
    #[error("Row mapping error: {0}")]
    RowMapping(String),

    /// Column value could not be decoded into the Rust type
    #[error("Data type error: {0}")]
    Type(String),

    /// Embedded migrations failed to apply
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Anything sqlx reports that has no closer match
    #[error("Database error: {0}")]
    Other(String),
}

impl StoreError {
    /// Whether the failure is about reaching the database rather than the statement itself
    pub fn is_connectivity(&self) -> bool {
        matches!(self, StoreError::Connection(_) | StoreError::Pool(_))
    }
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnNotFound(col) => {
                StoreError::RowMapping(format!("Column not found: {}", col))
            }
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => StoreError::RowMapping(
                format!("Column index out of bounds: {} >= {}", index, len),
            ),
            sqlx::Error::ColumnDecode { index, source } => {
                StoreError::Type(format!("Error decoding column {}: {}", index, source))
            }
            sqlx::Error::Decode(source) => StoreError::Type(format!("Decode error: {}", source)),
            sqlx::Error::Configuration(msg) => {
                StoreError::Connection(format!("Configuration error: {}", msg))
            }
            sqlx::Error::Io(err) => StoreError::Connection(format!("IO error: {}", err)),
            sqlx::Error::Tls(err) => StoreError::Connection(format!("TLS error: {}", err)),
            sqlx::Error::Protocol(msg) => StoreError::Connection(format!("Protocol error: {}", msg)),
            sqlx::Error::PoolTimedOut => {
                StoreError::Pool("Connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::Pool("Connection pool is closed".to_string()),
            sqlx::Error::Database(db_err) => StoreError::Query(db_err.to_string()),
            sqlx::Error::Migrate(err) => StoreError::Migration(err.to_string()),
            err => StoreError::Other(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}
