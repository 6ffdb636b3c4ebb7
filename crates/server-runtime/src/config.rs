//! Runtime configuration from environment variables.

use fb_api_gateway::GatewayConfig;
use std::env;
use thiserror::Error;

/// Placeholder secret shipped in example env files; never accepted at boot.
const DEFAULT_SECRET: &str = "change-me";

/// Process-level configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Gateway (HTTP) configuration.
    pub gateway: GatewayConfig,
    /// Shared secret for the HMAC token gate.
    pub hmac_secret: String,
    /// Period of the orphan-reconciliation sweep; 0 disables it.
    pub reconcile_interval_secs: u64,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum RuntimeConfigError {
    /// `FB_HMAC_SECRET` unset or left at the placeholder value.
    #[error("FB_HMAC_SECRET must be set to a non-default value")]
    InsecureSecret,

    /// An environment variable failed to parse.
    #[error("invalid value for {name}: {value}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

impl RuntimeConfig {
    /// Load configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `FB_BIND_ADDR`: listen address (default: 127.0.0.1:5000)
    /// - `FB_HMAC_SECRET`: token secret, required, must not be the placeholder
    /// - `FB_CORS_ORIGINS`: comma-separated allowed origins
    /// - `FB_RECONCILE_INTERVAL_SECS`: sweep period, 0 disables (default: 300)
    pub fn from_env() -> Result<Self, RuntimeConfigError> {
        let mut gateway = GatewayConfig::default();

        if let Ok(addr) = env::var("FB_BIND_ADDR") {
            gateway.bind_addr = addr.parse().map_err(|_| RuntimeConfigError::InvalidVar {
                name: "FB_BIND_ADDR",
                value: addr,
            })?;
        }
        if let Ok(origins) = env::var("FB_CORS_ORIGINS") {
            gateway.cors_allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }

        let hmac_secret = env::var("FB_HMAC_SECRET").unwrap_or_default();
        if hmac_secret.is_empty() || hmac_secret == DEFAULT_SECRET {
            return Err(RuntimeConfigError::InsecureSecret);
        }

        let reconcile_interval_secs = match env::var("FB_RECONCILE_INTERVAL_SECS") {
            Ok(value) => value.parse().map_err(|_| RuntimeConfigError::InvalidVar {
                name: "FB_RECONCILE_INTERVAL_SECS",
                value,
            })?,
            Err(_) => 300,
        };

        Ok(Self {
            gateway,
            hmac_secret,
            reconcile_interval_secs,
        })
    }
}
