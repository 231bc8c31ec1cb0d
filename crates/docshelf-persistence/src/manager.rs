//! Slot manager: builds the configured slot for each collection.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use docshelf_core::config::persistence::PersistenceConfig;
use docshelf_core::traits::SnapshotStore;
use docshelf_entity::document::DocumentRecord;
use docshelf_entity::memo::MemoRecord;

use crate::providers::{JsonFileStore, LatencyStore};

/// Opens the JSON file slots described by the persistence configuration.
#[derive(Debug, Clone)]
pub struct SlotManager {
    config: PersistenceConfig,
}

impl SlotManager {
    /// Create a manager for the given configuration.
    pub fn new(config: &PersistenceConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Slot holding the document forest.
    pub fn documents(&self) -> Arc<dyn SnapshotStore<DocumentRecord>> {
        self.open(&self.config.documents_slot)
    }

    /// Slot holding the memos.
    pub fn memos(&self) -> Arc<dyn SnapshotStore<MemoRecord>> {
        self.open(&self.config.memos_slot)
    }

    fn open<T>(&self, slot: &str) -> Arc<dyn SnapshotStore<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let path = self.config.slot_path(slot);
        debug!(slot, path = %path.display(), latency_ms = self.config.latency_ms, "Opening slot");

        let store: Arc<dyn SnapshotStore<T>> = Arc::new(JsonFileStore::new(slot, path));
        if self.config.latency_ms == 0 {
            store
        } else {
            Arc::new(LatencyStore::new(
                store,
                Duration::from_millis(self.config.latency_ms),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slots_live_under_data_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = PersistenceConfig {
            data_root: dir.path().to_string_lossy().into_owned(),
            ..PersistenceConfig::default()
        };
        let manager = SlotManager::new(&config);

        let memos = manager.memos();
        memos.save_all(&[]).await.unwrap();

        assert_eq!(memos.slot(), "memos");
        assert!(dir.path().join("memos.json").exists());
        assert!(!manager.documents().exists().await.unwrap());
    }
}
