//! Adapters implementing the Request Store ports.

mod memory;

pub use memory::MemoryRequestStore;
