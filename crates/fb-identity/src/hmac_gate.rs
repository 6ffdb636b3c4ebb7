//! # HMAC Token Gate
//!
//! Bearer tokens of the form `subject:email:tag` where `tag` is the hex
//! HMAC-SHA256 of `subject:email` under a shared secret. Tag comparison is
//! constant-time.

use crate::ports::IdentityGate;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use shared_types::{CoreError, IdentityClaims};
use subtle::ConstantTimeEq;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Identity gate verifying HMAC-signed bearer tokens.
pub struct HmacTokenGate {
    secret: Vec<u8>,
}

impl HmacTokenGate {
    /// Create a gate over the given shared secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Mint a token for the given identity. Used by operators and tests to
    /// issue credentials; verification path is [`IdentityGate::resolve`].
    pub fn mint(&self, subject_id: &str, email: &str) -> String {
        let payload = format!("{subject_id}:{email}");
        format!("{payload}:{}", hex::encode(self.tag(&payload)))
    }

    fn tag(&self, payload: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

#[async_trait]
impl IdentityGate for HmacTokenGate {
    async fn resolve(&self, bearer: &str) -> Result<IdentityClaims, CoreError> {
        let (payload, tag_hex) = bearer.rsplit_once(':').ok_or(CoreError::Unauthorized)?;
        let (subject_id, email) = payload.split_once(':').ok_or(CoreError::Unauthorized)?;
        if subject_id.is_empty() || email.is_empty() {
            return Err(CoreError::Unauthorized);
        }

        let presented = hex::decode(tag_hex).map_err(|_| CoreError::Unauthorized)?;
        let expected = self.tag(payload);
        if presented.ct_eq(&expected).into() {
            Ok(IdentityClaims::new(subject_id, email))
        } else {
            debug!("bearer token tag mismatch");
            Err(CoreError::Unauthorized)
        }
    }
}
