//! # Outbound Ports
//!
//! External dependencies of the Workflow Engine beyond the two stores.

use chrono::{DateTime, Utc};

/// Source of the `request_date` stamp - outbound port.
///
/// Injected so tests can pin time; production uses [`SystemClock`].
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
