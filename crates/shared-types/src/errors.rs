//! # Error Types
//!
//! One failure taxonomy shared by all subsystems so the gateway can map any
//! core failure to a response uniformly.

use crate::value_objects::FoodId;
use thiserror::Error;

/// Failure classification shared across subsystems.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Missing or invalid credential; raised before any store access.
    #[error("missing or invalid credential")]
    Unauthorized,

    /// Authenticated caller is not the owner of the targeted entity.
    #[error("caller does not own {entity} {id}")]
    Forbidden {
        /// Kind of entity ("food", ...).
        entity: &'static str,
        /// Identifier of the entity.
        id: String,
    },

    /// Referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity ("food", ...).
        entity: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// The item was no longer available when the transition was attempted.
    #[error("food {food_id} is no longer available")]
    Conflict {
        /// Item whose status transition lost the race.
        food_id: FoodId,
    },

    /// Underlying storage unreachable or failing.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CoreError {
    /// Shorthand for `NotFound` on an entity kind + id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Shorthand for `Forbidden` on an entity kind + id.
    pub fn forbidden(entity: &'static str, id: impl ToString) -> Self {
        Self::Forbidden {
            entity,
            id: id.to_string(),
        }
    }
}
