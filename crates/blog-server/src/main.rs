//! Blog posts service binary.
//!
//! Wires configuration, logging, the selected post store, and the HTTP
//! dispatcher together, then serves until `Ctrl-C` or `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration (defaults, YAML file, `DATABASE_URL`, flags)
//! 3. Initialize structured logging (tracing)
//! 4. Build and connect the configured store, optionally migrating
//! 5. Serve HTTP until a shutdown signal arrives
//! 6. Disconnect the store

mod cli;
mod config;
mod error;
mod logging;

use std::sync::Arc;

use blog_api::{AppState, shutdown_signal, start_server};
use blog_db::{InMemoryPostStore, PostStore, PostgresPostStore};
use clap::Parser;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::{ServiceConfig, StoreKind};
use crate::error::ServiceError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step fails or the server stops
/// abnormally.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1-2. Flags and configuration.
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // 3. Logging.
    logging::init(&config.logging)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %config.store.kind,
        http_host = config.server.host,
        http_port = config.server.port,
        "blog-server starting"
    );

    // 4. Store.
    let store = build_store(&config).await?;

    // 5. Serve.
    let state = AppState::shared(Arc::clone(&store));
    let served = start_server(&config.server.to_server_config(), state, shutdown_signal()).await;
    if let Err(e) = &served {
        tracing::error!(error = %e, "Server stopped with an error");
    }

    // 6. Teardown runs once, whatever the serve outcome.
    if let Err(e) = store.disconnect().await {
        warn!(error = %e, "Store disconnect failed");
    }

    served?;
    info!("blog-server stopped");
    Ok(())
}

/// Resolve all configuration layers.
fn load_config(cli: &Cli) -> Result<ServiceConfig, ServiceError> {
    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    Ok(config)
}

/// Construct the store selected by `config.store.kind`.
///
/// The `PostgreSQL` store is connected (and migrated when requested) before
/// it is returned; a failure here aborts startup.
async fn build_store(config: &ServiceConfig) -> Result<Arc<dyn PostStore>, ServiceError> {
    match config.store.kind {
        StoreKind::Memory => {
            let store = if config.store.seed {
                InMemoryPostStore::new()
            } else {
                InMemoryPostStore::empty()
            };
            info!(seeded = config.store.seed, "Using in-memory store");
            Ok(Arc::new(store))
        }
        StoreKind::Postgres => {
            let db = &config.database;
            let pool_config = db.pool_config()?;
            info!(
                target_db = %db.describe(),
                max_connections = db.max_connections,
                "Connecting to PostgreSQL"
            );

            let store = PostgresPostStore::new(&pool_config);
            store.connect().await?;

            if db.migrate {
                store.run_migrations().await?;
                info!("Database migrations applied");
            }

            Ok(Arc::new(store))
        }
    }
}
