//! Simulated network latency around another slot.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;

/// Delays every load and save by a fixed duration before delegating.
pub struct LatencyStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    inner: Arc<dyn SnapshotStore<T>>,
    delay: Duration,
}

impl<T> fmt::Debug for LatencyStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatencyStore")
            .field("inner", &self.inner)
            .field("delay", &self.delay)
            .finish()
    }
}

impl<T> LatencyStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Wrap `inner`, delaying each access by `delay`.
    pub fn new(inner: Arc<dyn SnapshotStore<T>>, delay: Duration) -> Self {
        Self { inner, delay }
    }

    async fn pause(&self, op: &str) {
        if !self.delay.is_zero() {
            trace!(
                slot = %self.inner.slot(),
                op,
                delay_ms = self.delay.as_millis() as u64,
                "Simulating latency"
            );
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl<T> SnapshotStore<T> for LatencyStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn slot(&self) -> &str {
        self.inner.slot()
    }

    async fn exists(&self) -> AppResult<bool> {
        self.inner.exists().await
    }

    async fn load_all(&self) -> AppResult<Vec<T>> {
        self.pause("load").await;
        self.inner.load_all().await
    }

    async fn save_all(&self, items: &[T]) -> AppResult<()> {
        self.pause("save").await;
        self.inner.save_all(items).await
    }
}
