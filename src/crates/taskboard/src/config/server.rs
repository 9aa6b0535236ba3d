//! Server configuration for taskboard-server
//!
//! Every option is a command-line flag that falls back to an environment
//! variable, so a deployment can be configured purely through its environment
//! (or a `.env` file loaded by the binary).

use clap::{ArgAction, Args, Parser};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] clap::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// HTTP listener and static frontend settings
#[derive(Debug, Clone, Args)]
pub struct ListenConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the frontend; unknown paths fall back to its index.html
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,
}

/// Database connection settings
#[derive(Clone, Args)]
pub struct DatabaseConfig {
    /// Database login
    #[arg(long = "db-user", env = "DB_USER")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Database host name
    #[arg(long = "db-server", env = "DB_SERVER")]
    pub server: String,

    /// Database name
    #[arg(long = "db-database", env = "DB_DATABASE")]
    pub database: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Encrypt the connection with TLS
    #[arg(long = "db-encrypt", env = "DB_ENCRYPT", default_value_t = true, action = ArgAction::Set)]
    pub encrypt: bool,

    /// Accept the server certificate without verifying it
    #[arg(
        long = "db-trust-server-certificate",
        env = "DB_TRUST_SERVER_CERTIFICATE",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub trust_server_certificate: bool,

    /// Maximum pooled connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    #[arg(long = "db-acquire-timeout-secs", env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 30)]
    pub acquire_timeout_secs: u64,

    /// Apply the embedded migrations at startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false, action = ArgAction::Set)]
    pub run_migrations: bool,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("port", &self.port)
            .field("encrypt", &self.encrypt)
            .field("trust_server_certificate", &self.trust_server_certificate)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

/// Values filled in for fields a create request leaves out
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct TaskDefaults {
    /// Status given to new tasks that do not specify one
    #[arg(long = "default-status", env = "DEFAULT_STATUS", default_value = "To Do")]
    pub status: String,

    /// Priority given to new tasks that do not specify one
    #[arg(long = "default-priority", env = "DEFAULT_PRIORITY", default_value = "Medium")]
    pub priority: String,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            status: "To Do".to_string(),
            priority: "Medium".to_string(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard-server", version, about = "Task tracking HTTP backend")]
pub struct ServerConfig {
    #[command(flatten)]
    pub listen: ListenConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub defaults: TaskDefaults,
}

impl ServerConfig {
    /// Parse from the process arguments and environment, then validate
    pub fn load() -> Result<Self, ServerConfigError> {
        let config = Self::try_parse()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from an explicit argument list, then validate
    pub fn load_from<I, T>(args: I) -> Result<Self, ServerConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Self::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values clap accepts but the server cannot run with
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        let required = [
            ("HOST", &self.listen.host),
            ("DB_USER", &self.database.user),
            ("DB_SERVER", &self.database.server),
            ("DB_DATABASE", &self.database.database),
            ("DEFAULT_STATUS", &self.defaults.status),
            ("DEFAULT_PRIORITY", &self.defaults.priority),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ServerConfigError::InvalidConfig(format!(
                    "{} cannot be empty",
                    name
                )));
            }
        }

        if self.database.max_connections == 0 {
            return Err(ServerConfigError::InvalidConfig(
                "DB_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` the HTTP listener binds to; host names are resolved at bind time
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen.host, self.listen.port)
    }
}
