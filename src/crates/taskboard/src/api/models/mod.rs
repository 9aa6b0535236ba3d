//! API data transfer objects (DTOs) and response models

pub mod task;

pub use task::{parse_due_date, MessageResponse, TaskPayload};

use crate::db::PoolStatistics;

/// System health response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// API version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,

    /// Pool usage, when the store is pool-backed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolStatistics>,
}

impl HealthResponse {
    /// Create a new health response
    pub fn new(status: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            database: database.into(),
            version: crate::version::VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            pool: None,
        }
    }

    /// Attach connection pool statistics
    pub fn with_pool(mut self, pool: Option<PoolStatistics>) -> Self {
        self.pool = pool;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::new("ok", "connected");
        assert_eq!(health.status, "ok");
        assert_eq!(health.database, "connected");
        assert!(!health.version.is_empty());
        assert!(!health.timestamp.is_empty());
    }
}
