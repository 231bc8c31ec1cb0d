//! Snapshot slot implementations.

pub mod json;
pub mod latency;
pub mod memory;

pub use json::JsonFileStore;
pub use latency::LatencyStore;
pub use memory::MemoryStore;
