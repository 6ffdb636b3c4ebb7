//! # Request Store Subsystem
//!
//! Owns request documents linking a requester to a food item. Records are
//! append-only: created exactly once by the workflow engine, never mutated,
//! never deleted. The `food_id` on a record is a weak reference into the Food
//! Store; the two stores are coupled only through the workflow engine.

pub mod adapters;
pub mod ports;

pub use adapters::MemoryRequestStore;
pub use ports::RequestStoreApi;
