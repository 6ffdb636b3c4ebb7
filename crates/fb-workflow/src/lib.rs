//! # Workflow Engine
//!
//! The only component that touches both stores. It owns the cross-store
//! transition (claim an item + record the request) and the cross-store
//! read-join (a requester's history enriched with food details).
//!
//! There is no cross-store transaction primitive: the transition and the
//! record insert are sequenced writes. The transition is a compare-and-swap,
//! so at most one request can win an item; a failure *between* the two writes
//! leaves the item `Requested` with no matching record. That window is not
//! rolled back - it is logged at error level and detectable via
//! [`WorkflowApi::reconcile_orphans`].

pub mod ports;
pub mod service;

pub use ports::{Clock, SystemClock, WorkflowApi};
pub use service::WorkflowService;
