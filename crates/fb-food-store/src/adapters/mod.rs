//! Adapters implementing the Food Store ports.

mod memory;

pub use memory::MemoryFoodStore;
