//! # Inbound Port
//!
//! What the Request Store subsystem can do for its callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{CoreError, Fields, FoodId, FoodRequest, IdentityClaims};

/// Request Store API - inbound port.
#[async_trait]
pub trait RequestStoreApi: Send + Sync {
    /// Append a new request record.
    ///
    /// Requester identity comes from the verified claims and `request_date`
    /// from the engine clock; both are stamped here, never read from the
    /// opaque fields.
    async fn create(
        &self,
        food_id: FoodId,
        requester: &IdentityClaims,
        fields: Fields,
        request_date: DateTime<Utc>,
    ) -> Result<FoodRequest, CoreError>;

    /// All requests made by the given requester, in insertion order.
    async fn list_by_requester(&self, requester_id: &str) -> Result<Vec<FoodRequest>, CoreError>;

    /// Whether any request references the given food item. Used by the
    /// orphan-reconciliation sweep.
    async fn exists_for_food(&self, food_id: FoodId) -> Result<bool, CoreError>;
}
