//! Ports exposed by the Request Store subsystem.

mod inbound;

pub use inbound::RequestStoreApi;
