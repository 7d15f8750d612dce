//! AgriSim server entry point.
//!
//! Loads configuration, initializes structured logging, builds the
//! shared application state, and serves the HTTP API until terminated.

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use agrisim_server::config::AgrisimConfig;
use agrisim_server::server::start_server;
use agrisim_server::state::AppState;

/// Default configuration file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "agrisim.yaml";

/// Application entry point.
///
/// Initializes logging, loads `agrisim.yaml` (or the file named by
/// `AGRISIM_CONFIG`; falls back to built-in defaults when absent),
/// builds the application state, and runs the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration parsing fails or the server
/// cannot bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config_path =
        std::env::var("AGRISIM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let config = if Path::new(&config_path).exists() {
        AgrisimConfig::from_file(Path::new(&config_path))?
    } else {
        AgrisimConfig::default()
    };

    // Initialize structured logging; RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("agrisim-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        seed = ?config.generator.seed,
        default_latitude = config.generator.default_latitude,
        default_longitude = config.generator.default_longitude,
        "configuration loaded"
    );

    // Build shared state and serve until terminated.
    let state = AppState::from_config(&config);
    start_server(&config.server, state).await?;

    Ok(())
}
