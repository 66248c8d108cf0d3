//! Asterisk Exporter
//!
//! Prometheus exporter for an Asterisk switch. Each scrape runs the enabled
//! collectors, which execute console commands through `asterisk -rx` and
//! turn the parsed records into metrics.

#![warn(missing_docs)]

pub mod cli;
pub mod collectors;
pub mod config;
pub mod executor;
pub mod exposition;
pub mod handlers;

use collectors::{AsteriskPoller, CollectorRegistry, SharedExecutor};
use config::ExporterConfig;
use executor::AsteriskCli;
use handlers::{create_router, scrape_limiter, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exporter error
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so that
/// `query` output on stdout stays machine-readable.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build a poller that shells out to the configured binary
pub fn build_poller(config: &ExporterConfig) -> AsteriskPoller {
    let executor: SharedExecutor = Arc::new(AsteriskCli::new(&config.asterisk_path));
    AsteriskPoller::with_tracing(executor)
}

/// Build the application state for `config`
pub fn build_state(config: &ExporterConfig) -> AppState {
    AppState {
        poller: Arc::new(build_poller(config)),
        registry: Arc::new(CollectorRegistry::from_config(
            &config.prefix,
            &config.collectors,
        )),
        metrics_path: config.metrics_path.clone(),
        limiter: scrape_limiter(config.max_requests),
    }
}

/// Start the exporter HTTP server
///
/// Serves until Ctrl+C or SIGTERM.
pub async fn start_server(config: ExporterConfig) -> Result<(), ExporterError> {
    config.validate()?;

    info!("Starting Asterisk Exporter");
    info!("Listen address: {}", config.listen_address);
    info!("Metrics path: {}", config.metrics_path);
    info!("Asterisk binary: {}", config.asterisk_path);
    match config.max_requests {
        0 => info!("Concurrent scrapes: unlimited"),
        n => info!("Concurrent scrapes: {}", n),
    }

    let state = build_state(&config);
    info!("Enabled collectors: {}", state.registry.names().join(", "));

    let app = create_router(state);

    let listener = TcpListener::bind(&config.listen_address).await?;
    info!("Exporter listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Server(e.to_string()))?;

    info!("Exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
