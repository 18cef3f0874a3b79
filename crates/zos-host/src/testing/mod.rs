//! Test doubles for host capability code.

mod memory_store;

pub use memory_store::MemoryStore;
