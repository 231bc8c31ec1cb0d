//! Core traits defined in `docshelf-core` and implemented by other crates.

pub mod snapshot;

pub use snapshot::SnapshotStore;
