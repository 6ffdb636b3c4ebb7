//! # Identity Gate Port
//!
//! Boundary trait for credential verification.

use async_trait::async_trait;
use shared_types::{CoreError, IdentityClaims};

/// Identity Gate - resolves bearer credentials to verified claims.
///
/// Implementations must fail with `Unauthorized` for any credential they
/// cannot positively verify; there is no partially-trusted outcome.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    /// Verify a bearer credential and produce the caller's claims.
    async fn resolve(&self, bearer: &str) -> Result<IdentityClaims, CoreError>;
}
