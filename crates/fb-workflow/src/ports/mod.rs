//! Ports exposed and consumed by the Workflow Engine.

mod inbound;
mod outbound;

pub use inbound::WorkflowApi;
pub use outbound::{Clock, SystemClock};
