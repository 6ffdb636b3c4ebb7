//! Cross-subsystem integration scenarios.

mod concurrency;
mod gateway_scenarios;
mod request_lifecycle;

use fb_food_store::MemoryFoodStore;
use fb_request_store::MemoryRequestStore;
use fb_workflow::WorkflowService;
use shared_types::{Fields, IdentityClaims};
use std::sync::Arc;

/// Fresh stores plus a workflow engine wired over them.
pub(crate) fn wired_core() -> (
    Arc<MemoryFoodStore>,
    Arc<MemoryRequestStore>,
    Arc<WorkflowService<MemoryFoodStore, MemoryRequestStore>>,
) {
    let foods = Arc::new(MemoryFoodStore::new());
    let requests = Arc::new(MemoryRequestStore::new());
    let workflow = Arc::new(WorkflowService::new(
        Arc::clone(&foods),
        Arc::clone(&requests),
    ));
    (foods, requests, workflow)
}

pub(crate) fn donor() -> IdentityClaims {
    IdentityClaims::new("donor-1", "a@x.com")
}

pub(crate) fn requester() -> IdentityClaims {
    IdentityClaims::new("user-2", "b@x.com")
}

pub(crate) fn fields(value: serde_json::Value) -> Fields {
    value.as_object().expect("test fields must be an object").clone()
}
