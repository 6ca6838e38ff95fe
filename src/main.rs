//! StudioFit Server — fitness studio management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use studiofit_api::{AppState, bootstrap, build_router};
use studiofit_core::config::AppConfig;
use studiofit_core::error::AppError;
use studiofit_database::{DatabasePool, Stores, migration};

#[tokio::main]
async fn main() {
    let env = std::env::var("STUDIOFIT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StudioFit v{}", env!("CARGO_PKG_VERSION"));

    let stores = if config.database.is_postgres() {
        let pool = DatabasePool::connect(&config.database).await?;
        migration::run_migrations(pool.pool()).await?;
        Stores::postgres(pool.into_pool())
    } else {
        tracing::warn!("No database URL configured; using the in-memory store");
        Stores::memory()
    };

    let state = AppState::build(config, stores);
    bootstrap::run(&state).await?;

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "StudioFit listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves when a shutdown signal arrives.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
