//! ZoneTrack server entry point.
//!
//! Wires the pieces together: structured logging, YAML configuration with
//! environment overrides, the zone registry, the transition engine, and the
//! Axum HTTP server. The optional first CLI argument is a configuration
//! file path; without it the built-in defaults apply.

mod config;

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use zonetrack_api::server::{ServerConfig, start_server};
use zonetrack_api::state::AppState;
use zonetrack_core::{TransitionEngine, ZoneRegistry, default_zones};

use crate::config::ServiceConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration, builds the zone registry and
/// transition engine, then serves HTTP until the process is terminated.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the zone set is
/// invalid, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("zonetrack-server starting");

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_file(Path::new(&path))?,
        None => ServiceConfig::from_env(),
    };

    let zones = if config.zones.is_empty() {
        default_zones()
    } else {
        config.zones.clone()
    };
    let registry = Arc::new(ZoneRegistry::from_zones(zones)?);
    info!(
        zones = registry.len(),
        history_capacity = config.history.capacity,
        "zone registry loaded"
    );

    let engine = TransitionEngine::with_history_capacity(registry, config.history.capacity);
    let state = Arc::new(AppState::new(engine));

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
