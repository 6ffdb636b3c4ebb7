//! # Telemetry
//!
//! Structured-logging initialization for the whole process: one subscriber,
//! configured from the environment, installed once at startup.

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level filter could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set, matching the usual
/// env-filter behavior.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    }

    tracing::info!(service = %config.service_name, "telemetry initialized");
    Ok(())
}
