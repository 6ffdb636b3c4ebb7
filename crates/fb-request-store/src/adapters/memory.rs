//! # In-Memory Request Store
//!
//! Append-only vector behind a lock. Insertion order is preserved so
//! `list_by_requester` returns a requester's records in the order they were
//! created, which the detailed view relies on for stable output ordering.

use crate::ports::RequestStoreApi;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared_types::{CoreError, Fields, FoodId, FoodRequest, IdentityClaims};
use tracing::debug;

/// Shared in-memory request collection.
#[derive(Default)]
pub struct MemoryRequestStore {
    requests: RwLock<Vec<FoodRequest>>,
}

impl MemoryRequestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestStoreApi for MemoryRequestStore {
    async fn create(
        &self,
        food_id: FoodId,
        requester: &IdentityClaims,
        fields: Fields,
        request_date: DateTime<Utc>,
    ) -> Result<FoodRequest, CoreError> {
        let request = FoodRequest::new(food_id, requester, fields, request_date);
        debug!(request_id = %request.id, food_id = %food_id, requester = %requester.email, "request recorded");
        self.requests.write().push(request.clone());
        Ok(request)
    }

    async fn list_by_requester(&self, requester_id: &str) -> Result<Vec<FoodRequest>, CoreError> {
        Ok(self
            .requests
            .read()
            .iter()
            .filter(|request| request.requester_id == requester_id)
            .cloned()
            .collect())
    }

    async fn exists_for_food(&self, food_id: FoodId) -> Result<bool, CoreError> {
        Ok(self
            .requests
            .read()
            .iter()
            .any(|request| request.food_id == food_id))
    }
}
