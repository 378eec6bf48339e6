//! FitRank HTTP Server Binary
//!
//! This is the main entry point for the FitRank REST API server. It loads
//! the configuration, seeds the aggregate store, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! AGGREGATES_PATH=seed/aggregates.json cargo run --bin fitrank-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `AGGREGATES_PATH`: JSON seed file of aggregate buckets (optional)
//! - `FITRANK_CONFIG`: TOML configuration file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use fitrank::config::ServerConfig;
use fitrank::db::LocalRepository;
use fitrank::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting FitRank HTTP Server");

    let config = ServerConfig::load()?;

    // Build the aggregate store and seed it when configured
    let repository = Arc::new(LocalRepository::new());
    match &config.aggregates_path {
        Some(path) => {
            let loaded = repository
                .load_json_file(path)
                .map_err(|e| anyhow::anyhow!(e))?;
            info!("Aggregate store seeded with {} buckets", loaded);
        }
        None => {
            warn!("No AGGREGATES_PATH configured; aggregate store starts empty");
        }
    }

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
