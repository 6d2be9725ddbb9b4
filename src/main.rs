//! Influencer Marketing Analytics Engine
//!
//! Batch reporting pipeline over a snapshot of the five base tables:
//! - data-quality checks (orphans, nulls, duplicates, consistency)
//! - denormalized analytical views with join auditing
//! - financial/engagement KPIs, time-series, and diagnostic signals
//! - a read-only HTTP surface for the BI dashboard

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use analytics_core::Dataset;
use api::{router, AppState};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    /// Path to the JSON dataset snapshot produced by the ETL.
    #[serde(default = "default_snapshot_path")]
    snapshot_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting Analytics Engine v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    // Load the dataset snapshot
    let outcome = Dataset::load_from_path(&config.snapshot_path)
        .with_context(|| format!("Failed to load snapshot from {}", config.snapshot_path))?;
    for warning in &outcome.warnings {
        warn!(%warning, "Snapshot row failed validation");
    }
    let dataset = Arc::new(outcome.dataset);
    health().dataset.set_healthy();

    // Run the standing data-quality report and build shared state
    let state = AppState::new(dataset.clone());
    info!(
        warnings = state.quality.warning_count(),
        clean = state.quality.is_clean(),
        "Data-quality report ready"
    );

    // Create router
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("ANALYTICS")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Snapshot path override
    if let Ok(path) = std::env::var("ANALYTICS_SNAPSHOT_PATH") {
        config.snapshot_path = path;
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
