//! Structured logging setup
//!
//! Services call [`init_logging`] once at startup. Output is JSON in
//! deployed environments and human-readable locally; the level comes from
//! `LogConfig::level` unless `RUST_LOG` overrides it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive, e.g. "info" or "storefront_recs=debug"
    pub level: String,
    pub service_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
            service_name: "storefront".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LogConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|_| ObservabilityError::InvalidFilter(config.level.clone()))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| ObservabilityError::Init(e.to_string()))?;

    tracing::info!(service = %config.service_name, format = ?config.format, "Logging initialized");
    Ok(())
}
