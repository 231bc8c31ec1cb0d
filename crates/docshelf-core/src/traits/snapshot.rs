//! Snapshot persistence trait for whole-collection durable slots.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// A durable key-value slot holding one complete collection.
///
/// Stores read and write the whole collection at once: there is no
/// per-record update. Implementations must preserve every field across a
/// save/load round-trip, so `save_all(load_all())` never changes content.
///
/// The trait is defined here in `docshelf-core` and implemented in
/// `docshelf-persistence` (JSON file, in-memory, and simulated latency).
#[async_trait]
pub trait SnapshotStore<T>: Send + Sync + std::fmt::Debug + 'static
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Name of the slot this store reads and writes.
    fn slot(&self) -> &str;

    /// Whether the slot has ever been written.
    async fn exists(&self) -> AppResult<bool>;

    /// Load the full collection. A slot that was never written loads as empty.
    async fn load_all(&self) -> AppResult<Vec<T>>;

    /// Replace the full collection.
    async fn save_all(&self, items: &[T]) -> AppResult<()>;
}
