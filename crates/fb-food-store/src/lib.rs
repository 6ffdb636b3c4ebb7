//! # Food Store Subsystem
//!
//! Owns food-item documents and their status field. The store is
//! authorization-agnostic beyond the donor-ownership check on mutations: the
//! caller id it compares against is always supplied by the orchestration
//! above it, never extracted from a payload.
//!
//! The status transition is exposed only as a compare-and-swap
//! (`transition_status`); there is no unconditional status write, so two
//! racing workflow calls cannot both claim the same item.

pub mod adapters;
pub mod ports;

pub use adapters::MemoryFoodStore;
pub use ports::FoodStoreApi;
