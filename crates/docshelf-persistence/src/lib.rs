//! # docshelf-persistence
//!
//! Snapshot slot implementations for docshelf. A slot holds one whole
//! collection: the JSON file provider backs the CLI, the in-memory provider
//! backs tests, and the latency decorator reproduces the mock backend's
//! artificial network delay.

pub mod manager;
pub mod providers;
pub mod seed;

pub use manager::SlotManager;
pub use providers::{JsonFileStore, LatencyStore, MemoryStore};
