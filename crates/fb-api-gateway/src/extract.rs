//! Credential extraction.
//!
//! Protected handlers take a [`Caller`] parameter; extraction resolves the
//! `Authorization: Bearer` header through the identity gate before the
//! handler body runs, so a missing or bad credential is rejected before any
//! store access.

use crate::error::ApiError;
use crate::router::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use shared_types::{CoreError, IdentityClaims};

/// Verified claims of the calling user.
pub struct Caller(pub IdentityClaims);

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(CoreError::Unauthorized)?;
        let bearer = header
            .strip_prefix("Bearer ")
            .ok_or(CoreError::Unauthorized)?;

        let claims = state.identity.resolve(bearer).await?;
        Ok(Caller(claims))
    }
}
