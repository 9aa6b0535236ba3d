//! Database connection management
//!
//! Provides the PostgreSQL connection pool, migrations, health checks and pool
//! statistics.

use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::DatabaseConfig;
use crate::db::error::StoreResult;

/// Type alias for the database connection pool
pub type DatabasePool = PgPool;

/// Database connection statistics, reported by `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatistics {
    /// Number of currently idle connections
    pub idle_connections: u32,

    /// Number of connections checked out by requests
    pub active_connections: u32,

    /// Connections currently open
    pub open_connections: u32,

    /// Timestamp of the statistics collection (Unix timestamp in seconds)
    pub collected_at: u64,
}

/// Map the two transport flags onto a PostgreSQL SSL mode
///
/// Trusting the server certificate only matters when the connection is
/// encrypted: it downgrades full verification to plain `require`.
pub fn ssl_mode(encrypt: bool, trust_server_certificate: bool) -> PgSslMode {
    match (encrypt, trust_server_certificate) {
        (false, _) => PgSslMode::Disable,
        (true, false) => PgSslMode::VerifyFull,
        (true, true) => PgSslMode::Require,
    }
}

/// Build connect options from configuration
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.server)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode(config.encrypt, config.trust_server_certificate))
        .application_name(crate::version::PKG_NAME)
}

/// Database connection wrapper shared by every request
#[derive(Clone, Debug)]
pub struct DatabaseConnection {
    pool: Arc<DatabasePool>,
}

impl DatabaseConnection {
    /// Open the pool and establish the first connection
    ///
    /// Fails if the database cannot be reached, so callers can refuse to
    /// start serving against a broken store.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(connect_options(config))
            .await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an already-open pool
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Apply the embedded migrations
    pub async fn run_migrations(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Perform a health check by running a simple query
    pub async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_one(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Get connection pool statistics
    pub fn get_pool_statistics(&self) -> PoolStatistics {
        let pool_ref = self.pool.as_ref();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let idle = pool_ref.num_idle() as u32;
        let open = pool_ref.size();

        PoolStatistics {
            idle_connections: idle,
            active_connections: open.saturating_sub(idle),
            open_connections: open,
            collected_at: now,
        }
    }

    /// Close the connection pool gracefully
    ///
    /// Waits for checked-out connections to be returned, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            user: "app".to_string(),
            password: "secret".to_string(),
            server: "db.internal".to_string(),
            database: "tasks".to_string(),
            port: 5433,
            encrypt: true,
            trust_server_certificate: false,
            max_connections: 5,
            acquire_timeout_secs: 1,
            run_migrations: false,
        }
    }

    #[test]
    fn test_ssl_mode_mapping() {
        assert!(matches!(ssl_mode(false, false), PgSslMode::Disable));
        assert!(matches!(ssl_mode(false, true), PgSslMode::Disable));
        assert!(matches!(ssl_mode(true, false), PgSslMode::VerifyFull));
        assert!(matches!(ssl_mode(true, true), PgSslMode::Require));
    }

    #[test]
    fn test_connect_options_from_config() {
        let options = connect_options(&config());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("tasks"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::VerifyFull));
    }

    #[tokio::test]
    async fn test_lazy_pool_statistics() {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_lazy_with(connect_options(&config()));
        let conn = DatabaseConnection::from_pool(pool);

        let stats = conn.get_pool_statistics();
        assert_eq!(stats.open_connections, 0);
        assert_eq!(stats.active_connections, 0);
        assert!(stats.collected_at > 0);
    }

    #[tokio::test]
    async fn test_close_marks_pool_closed() {
        let pool = PgPoolOptions::new().connect_lazy_with(connect_options(&config()));
        let conn = DatabaseConnection::from_pool(pool);

        assert!(!conn.pool().is_closed());
        conn.close().await;
        assert!(conn.pool().is_closed());
    }
}
