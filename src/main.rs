//! OnTrack server: todo REST API over PostgreSQL.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ontrack_api::{AppState, run_server};
use ontrack_core::config::AppConfig;
use ontrack_core::error::AppError;
use ontrack_database::migration::run_migrations;
use ontrack_database::{DatabasePool, PgTodoRepository};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `ONTRACK_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ONTRACK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect, migrate, serve, and close the pool once the server has drained.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting OnTrack v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping database migrations");
    }

    let repo = Arc::new(PgTodoRepository::new(db.pool().clone()));
    let state = AppState::new(config, repo);

    let result = run_server(state, shutdown_signal()).await;

    db.close().await;
    tracing::info!("OnTrack server stopped");
    result
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
