//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use docshelf_core::config::AppConfig;
use docshelf_core::config::persistence::PersistenceConfig;
use docshelf_persistence::{SlotManager, seed};
use docshelf_service::{HierarchyStore, MemoService};

/// A throwaway library rooted in a temporary directory
pub struct TestApp {
    /// Keeps the data directory alive for the test's duration
    pub dir: TempDir,
    /// Application config pointing at `dir`
    pub config: AppConfig,
}

impl TestApp {
    /// Create an empty library (no sample seeding)
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = AppConfig {
            persistence: PersistenceConfig {
                data_root: dir.path().to_string_lossy().into_owned(),
                seed_samples: false,
                ..PersistenceConfig::default()
            },
            ..AppConfig::default()
        };
        Self { dir, config }
    }

    /// Slot manager for this library
    pub fn slots(&self) -> SlotManager {
        SlotManager::new(&self.config.persistence)
    }

    /// Open (or reopen) the document store from disk
    pub async fn open_store(&self) -> HierarchyStore {
        HierarchyStore::load(self.slots().documents())
            .await
            .expect("Failed to open store")
    }

    /// Open the document store, seeding the sample library on first use
    pub async fn open_seeded_store(&self) -> HierarchyStore {
        HierarchyStore::load_or_seed(self.slots().documents(), seed::sample_documents())
            .await
            .expect("Failed to open store")
    }

    /// Open (or reopen) the memo service from disk
    pub async fn open_memos(&self) -> MemoService {
        MemoService::load(self.slots().memos())
            .await
            .expect("Failed to open memos")
    }

    /// Path of the JSON file backing the document slot
    pub fn documents_path(&self) -> PathBuf {
        self.config
            .persistence
            .slot_path(&self.config.persistence.documents_slot)
    }
}
