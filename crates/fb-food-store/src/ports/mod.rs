//! Ports exposed by the Food Store subsystem.

mod inbound;

pub use inbound::FoodStoreApi;
