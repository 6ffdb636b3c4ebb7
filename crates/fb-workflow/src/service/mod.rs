//! Service layer orchestrating the stores behind the workflow port.

mod workflow_service;

pub use workflow_service::WorkflowService;
