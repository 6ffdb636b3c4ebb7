//! # Workflow Service
//!
//! Implements the `WorkflowApi` port over injected store handles.

use crate::ports::{Clock, SystemClock, WorkflowApi};
use async_trait::async_trait;
use fb_food_store::FoodStoreApi;
use fb_request_store::RequestStoreApi;
use futures::future::join_all;
use shared_types::{
    CoreError, Fields, FoodId, FoodRequest, FoodStatus, IdentityClaims, RequestView,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Workflow Engine implementation.
///
/// Holds shared handles to both stores; the stores never reference each
/// other, they are coupled only here and through the `food_id` on records.
pub struct WorkflowService<F, R> {
    food_store: Arc<F>,
    request_store: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<F, R> WorkflowService<F, R>
where
    F: FoodStoreApi,
    R: RequestStoreApi,
{
    /// Create a service using the wall clock.
    pub fn new(food_store: Arc<F>, request_store: Arc<R>) -> Self {
        Self::with_clock(food_store, request_store, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock.
    pub fn with_clock(food_store: Arc<F>, request_store: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            food_store,
            request_store,
            clock,
        }
    }
}

#[async_trait]
impl<F, R> WorkflowApi for WorkflowService<F, R>
where
    F: FoodStoreApi + 'static,
    R: RequestStoreApi + 'static,
{
    async fn request_food(
        &self,
        claims: &IdentityClaims,
        food_id: FoodId,
        fields: Fields,
    ) -> Result<FoodRequest, CoreError> {
        // Existence check first: an unknown id must surface as NotFound, and
        // the weak food_id reference on the record should point at something
        // that existed at request time.
        self.food_store.get_by_id(food_id).await?;

        self.food_store
            .transition_status(food_id, FoodStatus::Available, FoodStatus::Requested)
            .await?;

        let created = self
            .request_store
            .create(food_id, claims, fields, self.clock.now())
            .await;

        match created {
            Ok(request) => {
                info!(
                    request_id = %request.id,
                    food_id = %food_id,
                    requester = %claims.email,
                    "food requested"
                );
                Ok(request)
            }
            Err(err) => {
                // No rollback exists for the status flip. The item stays
                // Requested with no matching record until the reconciliation
                // sweep picks it up.
                error!(
                    food_id = %food_id,
                    %err,
                    "request record insert failed after status transition; item left orphaned"
                );
                Err(err)
            }
        }
    }

    async fn my_requests_detailed(
        &self,
        claims: &IdentityClaims,
    ) -> Result<Vec<RequestView>, CoreError> {
        let requests = self
            .request_store
            .list_by_requester(&claims.subject_id)
            .await?;

        let lookups = requests
            .iter()
            .map(|request| self.food_store.get_by_id(request.food_id));
        let foods = join_all(lookups).await;

        Ok(requests
            .iter()
            .zip(foods)
            .map(|(request, food)| RequestView::project(request, food.ok().as_ref()))
            .collect())
    }

    async fn reconcile_orphans(&self) -> Result<Vec<FoodId>, CoreError> {
        let requested = self
            .food_store
            .list_by_status(FoodStatus::Requested)
            .await?;

        let mut orphans = Vec::new();
        for item in requested {
            if !self.request_store.exists_for_food(item.id).await? {
                orphans.push(item.id);
            }
        }

        if !orphans.is_empty() {
            warn!(count = orphans.len(), "requested items with no matching request record");
        }
        Ok(orphans)
    }
}
