//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and (optionally) metrics
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError, ProxyConfig};
use crate::error::ProxyError;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] ProxyError),

    #[error("failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}

/// Command-line overrides applied on top of the file (or defaults).
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub bind: Option<&'a str>,
    pub limit: Option<usize>,
}

/// Resolve the effective configuration from an optional file and overrides.
///
/// Overrides are validated together with the rest of the config.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides<'_>) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    if let Some(bind) = overrides.bind {
        config.listener.bind_address = bind.to_string();
    }
    if let Some(limit) = overrides.limit {
        config.ranking.limit = limit;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Initialize subsystems, bind, and serve until shutdown.
pub async fn run(config: ProxyConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        upstream_timeout_ms = config.upstream.timeout_ms,
        limit = config.ranking.limit,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
