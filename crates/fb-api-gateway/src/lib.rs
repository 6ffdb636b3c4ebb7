//! # API Gateway
//!
//! HTTP binding for the food-sharing core: routing, credential extraction,
//! CORS, body limits, and the error-to-status mapping. Pure plumbing - every
//! decision with state behind it lives in the stores and the workflow engine.

pub mod config;
pub mod error;
pub mod extract;
pub mod router;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use router::{build_router, AppState};
