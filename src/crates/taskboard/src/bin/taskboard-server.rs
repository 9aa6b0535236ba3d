//! Taskboard server binary
//!
//! Connects to the database, then serves the task API and the static
//! frontend until Ctrl-C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use taskboard::api::{create_router, AppState};
use taskboard::config::ServerConfig;
use taskboard::db::{DatabaseConnection, PgTaskStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment may already be set
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Loading server configuration...");
    let config = ServerConfig::load().context("Configuration required")?;

    tracing::info!(
        "Database: {}:{}/{} (encrypt: {}, trust certificate: {})",
        config.database.server,
        config.database.port,
        config.database.database,
        config.database.encrypt,
        config.database.trust_server_certificate
    );

    // Initialize database connection
    let db = DatabaseConnection::connect(&config.database)
        .await
        .context("Database connection failed")?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        db.run_migrations().await?;
    }

    // Health check the database
    tracing::info!("Performing database health check");
    db.health_check()
        .await
        .context("Database health check failed")?;
    tracing::info!("Connected to database");

    let store = Arc::new(PgTaskStore::new(db));
    let app_state = AppState::new(store.clone(), config.defaults.clone());

    tracing::info!("Serving frontend from {}", config.listen.static_dir.display());
    let app = create_router(app_state, &config.listen.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server is running on {}", listener.local_addr()?);

    // Run server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let stats = store.connection().get_pool_statistics();
    tracing::info!(
        "Closing database pool ({} open, {} idle)",
        stats.open_connections,
        stats.idle_connections
    );
    store.connection().close().await;
    tracing::info!("Taskboard server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL-C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
