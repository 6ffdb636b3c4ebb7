//! # Value Objects
//!
//! Identifier newtypes, the food status enum, and verified identity claims.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a food item, assigned by the store on creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(Uuid);

impl FoodId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FoodId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Unique identifier of a food request, assigned at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lifecycle state of a food item.
///
/// New items start `Available`. The only defined transition is
/// `Available -> Requested`, performed by the workflow engine; no transition
/// back is defined (cancellation/return is out of scope).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    /// Listed by a donor, not yet claimed.
    Available,
    /// Claimed by a requester.
    Requested,
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodStatus::Available => f.write_str("available"),
            FoodStatus::Requested => f.write_str("requested"),
        }
    }
}

/// Verified identity produced by the identity gate.
///
/// The core consumes only these claims; it never sees the bearer credential
/// they were resolved from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Stable subject identifier.
    pub subject_id: String,
    /// Verified email address.
    pub email: String,
}

impl IdentityClaims {
    /// Construct claims from already-verified values.
    pub fn new(subject_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
        }
    }
}
