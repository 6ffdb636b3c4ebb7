//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Main gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Socket the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Origins allowed by CORS. Empty means same-origin only.
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000),
            cors_allowed_origins: vec!["http://localhost:5173".to_owned()],
            max_body_bytes: 64 * 1024,
        }
    }
}

impl GatewayConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }
        for origin in &self.cors_allowed_origins {
            if origin.parse::<axum::http::HeaderValue>().is_err() {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A size or count limit is out of range.
    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    /// A CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
