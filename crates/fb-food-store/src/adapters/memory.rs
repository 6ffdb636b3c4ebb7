//! # In-Memory Food Store
//!
//! Process-local adapter backing the Food Store port with a shared map.
//! The lock is held only for the duration of a single map operation, never
//! across an await point, so the compare-and-swap in `transition_status` is
//! atomic with respect to concurrent workflow calls.

use crate::ports::FoodStoreApi;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{CoreError, Fields, FoodId, FoodItem, FoodStatus, IdentityClaims};
use std::collections::HashMap;
use tracing::debug;

/// Shared in-memory food collection.
#[derive(Default)]
pub struct MemoryFoodStore {
    items: RwLock<HashMap<FoodId, FoodItem>>,
}

impl MemoryFoodStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FoodStoreApi for MemoryFoodStore {
    async fn create(&self, donor: &IdentityClaims, fields: Fields) -> Result<FoodItem, CoreError> {
        let item = FoodItem::new(donor, fields);
        debug!(food_id = %item.id, donor = %item.donor_email, "food item created");
        self.items.write().insert(item.id, item.clone());
        Ok(item)
    }

    async fn list_by_status(&self, status: FoodStatus) -> Result<Vec<FoodItem>, CoreError> {
        Ok(self
            .items
            .read()
            .values()
            .filter(|item| item.status == status)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: FoodId) -> Result<FoodItem, CoreError> {
        self.items
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("food", id))
    }

    async fn update(
        &self,
        id: FoodId,
        caller_id: &str,
        patch: Fields,
    ) -> Result<FoodItem, CoreError> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("food", id))?;
        item.ensure_owned_by(caller_id)?;
        item.apply_patch(patch);
        Ok(item.clone())
    }

    async fn delete(&self, id: FoodId, caller_id: &str) -> Result<(), CoreError> {
        let mut items = self.items.write();
        let item = items
            .get(&id)
            .ok_or_else(|| CoreError::not_found("food", id))?;
        item.ensure_owned_by(caller_id)?;
        items.remove(&id);
        debug!(food_id = %id, "food item deleted");
        Ok(())
    }

    async fn list_by_owner(&self, donor_id: &str) -> Result<Vec<FoodItem>, CoreError> {
        Ok(self
            .items
            .read()
            .values()
            .filter(|item| item.is_owned_by(donor_id))
            .cloned()
            .collect())
    }

    async fn transition_status(
        &self,
        id: FoodId,
        expected: FoodStatus,
        new_status: FoodStatus,
    ) -> Result<FoodItem, CoreError> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("food", id))?;
        if item.status != expected {
            debug!(food_id = %id, current = %item.status, "status transition lost the race");
            return Err(CoreError::Conflict { food_id: id });
        }
        item.status = new_status;
        debug!(food_id = %id, status = %new_status, "status transitioned");
        Ok(item.clone())
    }
}
