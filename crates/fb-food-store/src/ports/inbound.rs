//! # Inbound Port
//!
//! What the Food Store subsystem can do for its callers.

use async_trait::async_trait;
use shared_types::{CoreError, Fields, FoodId, FoodItem, FoodStatus, IdentityClaims};

/// Food Store API - inbound port.
///
/// Every operation is a potentially-blocking storage call; implementations
/// must be safe to share across concurrent callers.
#[async_trait]
pub trait FoodStoreApi: Send + Sync {
    /// Create a new item owned by the given donor, starting `Available`.
    async fn create(&self, donor: &IdentityClaims, fields: Fields) -> Result<FoodItem, CoreError>;

    /// All items currently in the given status. Order is unspecified.
    async fn list_by_status(&self, status: FoodStatus) -> Result<Vec<FoodItem>, CoreError>;

    /// Fetch one item by id.
    async fn get_by_id(&self, id: FoodId) -> Result<FoodItem, CoreError>;

    /// Merge-patch the opaque fields of an item.
    ///
    /// Fails with `Forbidden` unless `caller_id` is the item's donor.
    async fn update(
        &self,
        id: FoodId,
        caller_id: &str,
        patch: Fields,
    ) -> Result<FoodItem, CoreError>;

    /// Delete an item, in any status. Same ownership check as `update`.
    /// Existing requests referencing the item are left in place; the
    /// detailed view tolerates the orphaned reference.
    async fn delete(&self, id: FoodId, caller_id: &str) -> Result<(), CoreError>;

    /// All items owned by the given donor.
    async fn list_by_owner(&self, donor_id: &str) -> Result<Vec<FoodItem>, CoreError>;

    /// Compare-and-swap status transition, used only by the workflow engine.
    ///
    /// Succeeds only when the current status equals `expected`; a concurrent
    /// caller that already moved the item wins, and this call fails with
    /// `Conflict`.
    async fn transition_status(
        &self,
        id: FoodId,
        expected: FoodStatus,
        new_status: FoodStatus,
    ) -> Result<FoodItem, CoreError>;
}
