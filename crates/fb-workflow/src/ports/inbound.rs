//! # Inbound Port
//!
//! What the Workflow Engine can do for its callers. All operations require
//! already-verified identity claims; credential handling happens upstream.

use async_trait::async_trait;
use shared_types::{CoreError, Fields, FoodId, FoodRequest, IdentityClaims, RequestView};

/// Workflow API - inbound port.
#[async_trait]
pub trait WorkflowApi: Send + Sync {
    /// Claim a food item for the calling requester.
    ///
    /// Validates the item exists (`NotFound` otherwise), transitions it
    /// `Available -> Requested` via compare-and-swap (`Conflict` if another
    /// caller got there first), then records the request stamped with the
    /// verified claims and the engine clock.
    async fn request_food(
        &self,
        claims: &IdentityClaims,
        food_id: FoodId,
        fields: Fields,
    ) -> Result<FoodRequest, CoreError>;

    /// The caller's requests joined with details from the referenced items.
    ///
    /// Food lookups run concurrently per record; output order follows the
    /// order the records were fetched in. A missing referenced item is not an
    /// error - its projected fields degrade to sentinels.
    async fn my_requests_detailed(
        &self,
        claims: &IdentityClaims,
    ) -> Result<Vec<RequestView>, CoreError>;

    /// Detect items stuck `Requested` with no matching request record.
    ///
    /// Read-only sweep compensating for the missing cross-store transaction;
    /// returns the orphaned ids for operator attention.
    async fn reconcile_orphans(&self) -> Result<Vec<FoodId>, CoreError>;
}
