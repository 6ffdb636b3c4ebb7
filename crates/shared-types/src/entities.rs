//! # Domain Entities
//!
//! Core entities of the food-sharing workflow. Donor- and requester-supplied
//! descriptive fields are opaque to the core: they are carried as a flattened
//! JSON map, stored and echoed but never interpreted, with the exception of
//! the few keys the detailed-request view projects out.

use crate::errors::CoreError;
use crate::value_objects::{FoodId, FoodStatus, IdentityClaims, RequestId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque caller-supplied descriptive fields.
pub type Fields = serde_json::Map<String, Value>;

/// Keys of `FoodItem` owned by the system; never settable from a payload.
const FOOD_RESERVED_KEYS: &[&str] = &["id", "_id", "donorId", "donorEmail", "status"];

/// Keys of `FoodRequest` owned by the system; never settable from a payload.
const REQUEST_RESERVED_KEYS: &[&str] = &[
    "id",
    "_id",
    "foodId",
    "requesterId",
    "requesterEmail",
    "requestDate",
];

/// Sentinel substituted for a missing string field in a detailed view.
pub const MISSING_FIELD: &str = "N/A";

/// A donor-listed unit of surplus food with a status.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Store-assigned identifier, immutable.
    pub id: FoodId,
    /// Owner subject id, set from the authenticated caller, immutable.
    pub donor_id: String,
    /// Owner email, set from the authenticated caller, immutable.
    pub donor_email: String,
    /// Lifecycle state.
    pub status: FoodStatus,
    /// Opaque donor-supplied fields (name, location, expiry, quantity, ...).
    #[serde(flatten)]
    pub fields: Fields,
}

impl FoodItem {
    /// Create a new item owned by the given donor. Status starts `Available`
    /// and system-owned keys are stripped from the supplied fields.
    pub fn new(claims: &IdentityClaims, fields: Fields) -> Self {
        Self {
            id: FoodId::generate(),
            donor_id: claims.subject_id.clone(),
            donor_email: claims.email.clone(),
            status: FoodStatus::Available,
            fields: strip_reserved(fields, FOOD_RESERVED_KEYS),
        }
    }

    /// Whether the given subject owns this item.
    pub fn is_owned_by(&self, caller_id: &str) -> bool {
        self.donor_id == caller_id
    }

    /// Merge-patch the opaque fields. Identity, id, and status keys in the
    /// patch are ignored; they are only writable through dedicated operations.
    pub fn apply_patch(&mut self, patch: Fields) {
        for (key, value) in strip_reserved(patch, FOOD_RESERVED_KEYS) {
            self.fields.insert(key, value);
        }
    }

    /// Enforce the ownership invariant for a mutating operation.
    pub fn ensure_owned_by(&self, caller_id: &str) -> Result<(), CoreError> {
        if self.is_owned_by(caller_id) {
            Ok(())
        } else {
            Err(CoreError::forbidden("food", self.id))
        }
    }
}

/// A record of one user's claim on one food item.
///
/// Created exactly once per request action; never mutated or deleted.
/// `food_id` is a weak reference: the referenced item may be deleted later,
/// which the detailed view tolerates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    /// Store-assigned identifier.
    pub id: RequestId,
    /// Referenced food item.
    pub food_id: FoodId,
    /// Requester subject id, taken from verified claims.
    pub requester_id: String,
    /// Requester email, taken from verified claims.
    pub requester_email: String,
    /// Timestamp assigned by the workflow engine at creation.
    pub request_date: DateTime<Utc>,
    /// Opaque request-specific fields.
    #[serde(flatten)]
    pub fields: Fields,
}

impl FoodRequest {
    /// Build a request from verified claims and the engine clock.
    ///
    /// Requester identity and the request date always come from the verified
    /// claims and the supplied clock reading; conflicting keys in the caller
    /// payload are stripped, never honored.
    pub fn new(
        food_id: FoodId,
        claims: &IdentityClaims,
        fields: Fields,
        request_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RequestId::generate(),
            food_id,
            requester_id: claims.subject_id.clone(),
            requester_email: claims.email.clone(),
            request_date,
            fields: strip_reserved(fields, REQUEST_RESERVED_KEYS),
        }
    }
}

/// A requester's view of one of their requests, enriched with details from
/// the referenced food item.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestView {
    /// Identifier of the request record.
    pub id: RequestId,
    /// Donor display name from the food item, or `"N/A"`.
    pub donor_name: String,
    /// Pickup location from the food item, or `"N/A"`.
    pub location: String,
    /// Expiry field from the food item, if present.
    pub expire: Option<Value>,
    /// When the request was made.
    pub request_date: DateTime<Utc>,
}

impl RequestView {
    /// Project a request and its (possibly missing) food item into a view.
    ///
    /// A missing item is not an error; every projected field degrades to its
    /// sentinel independently.
    pub fn project(request: &FoodRequest, food: Option<&FoodItem>) -> Self {
        let string_field = |key: &str| -> String {
            food.and_then(|f| f.fields.get(key))
                .and_then(Value::as_str)
                .unwrap_or(MISSING_FIELD)
                .to_owned()
        };

        Self {
            id: request.id,
            donor_name: string_field("donorName"),
            location: string_field("location"),
            expire: food.and_then(|f| f.fields.get("expire")).cloned(),
            request_date: request.request_date,
        }
    }
}

fn strip_reserved(mut fields: Fields, reserved: &[&str]) -> Fields {
    for key in reserved {
        fields.remove(*key);
    }
    fields
}
