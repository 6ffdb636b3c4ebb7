//! # Identity Gate
//!
//! Resolves a bearer credential to verified `{subject_id, email}` claims, or
//! fails. The rest of the system consumes only the resulting claims; nothing
//! downstream ever parses or trusts the credential itself.

pub mod hmac_gate;
pub mod ports;

pub use hmac_gate::HmacTokenGate;
pub use ports::IdentityGate;
