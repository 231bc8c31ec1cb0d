//! In-memory snapshot slot.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;

/// A slot held in process memory.
///
/// Clones share the same slot, so a test can keep a handle while the store
/// owns another. Write failures can be injected to exercise the
/// no-partial-commit path.
pub struct MemoryStore<T> {
    /// Slot name.
    slot: String,
    /// Current content; `None` until the first save.
    items: Arc<Mutex<Option<Vec<T>>>>,
    /// Number of upcoming saves that will fail.
    failing_saves: Arc<AtomicUsize>,
    /// Number of successful saves so far.
    saves: Arc<AtomicUsize>,
}

impl<T> MemoryStore<T> {
    /// Create an empty, never-written slot.
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            items: Arc::new(Mutex::new(None)),
            failing_saves: Arc::new(AtomicUsize::new(0)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a slot that already holds the given items.
    pub fn with_items(slot: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(Some(items))),
            ..Self::new(slot)
        }
    }

    /// Make the next `count` saves fail as if the quota were exhausted.
    pub fn fail_next_saves(&self, count: usize) {
        self.failing_saves.store(count, Ordering::SeqCst);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            items: Arc::clone(&self.items),
            failing_saves: Arc::clone(&self.failing_saves),
            saves: Arc::clone(&self.saves),
        }
    }
}

impl<T> fmt::Debug for MemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("slot", &self.slot)
            .field("saves", &self.save_count())
            .finish()
    }
}

#[async_trait]
impl<T> SnapshotStore<T> for MemoryStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn exists(&self) -> AppResult<bool> {
        Ok(self.items.lock().await.is_some())
    }

    async fn load_all(&self) -> AppResult<Vec<T>> {
        Ok(self.items.lock().await.clone().unwrap_or_default())
    }

    async fn save_all(&self, items: &[T]) -> AppResult<()> {
        let remaining = self.failing_saves.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_saves.store(remaining - 1, Ordering::SeqCst);
            return Err(AppError::persistence(format!(
                "Slot '{}' rejected the write: quota exceeded",
                self.slot
            )));
        }

        *self.items.lock().await = Some(items.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_core::error::ErrorKind;

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store: MemoryStore<String> = MemoryStore::new("names");
        let handle = store.clone();

        assert!(!handle.exists().await.unwrap());
        store.save_all(&["a".to_string()]).await.unwrap();

        assert!(handle.exists().await.unwrap());
        assert_eq!(handle.load_all().await.unwrap(), vec!["a".to_string()]);
        assert_eq!(handle.save_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_failures_leave_content_untouched() {
        let store = MemoryStore::with_items("names", vec!["kept".to_string()]);
        store.fail_next_saves(1);

        let err = store.save_all(&[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Persistence);
        assert_eq!(store.load_all().await.unwrap(), vec!["kept".to_string()]);

        store.save_all(&[]).await.unwrap();
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
