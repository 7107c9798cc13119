//! Ports: trait contracts between the engine and its collaborators.

mod memory_store;

pub use memory_store::MemoryStore;
