// Adapters layer: concrete implementations of the domain ports.

pub mod local_storage;
pub mod memory_store;
pub mod snapshot;
