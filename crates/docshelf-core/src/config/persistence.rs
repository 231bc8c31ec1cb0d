//! Durable slot configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where and how collections are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersistenceConfig {
    /// Root directory holding one JSON file per slot.
    #[serde(default = "default_data_root")]
    #[validate(length(min = 1))]
    pub data_root: String,
    /// Slot name for the document collection.
    #[serde(default = "default_documents_slot")]
    #[validate(length(min = 1, max = 64))]
    pub documents_slot: String,
    /// Slot name for the memo collection.
    #[serde(default = "default_memos_slot")]
    #[validate(length(min = 1, max = 64))]
    pub memos_slot: String,
    /// Artificial delay applied to every slot access, in milliseconds.
    #[serde(default)]
    #[validate(range(max = 10_000))]
    pub latency_ms: u64,
    /// Seed sample documents when the document slot has never been written.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
}

impl PersistenceConfig {
    /// File backing the given slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        PathBuf::from(&self.data_root).join(format!("{slot}.json"))
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            documents_slot: default_documents_slot(),
            memos_slot: default_memos_slot(),
            latency_ms: 0,
            seed_samples: true,
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_documents_slot() -> String {
    "documents".to_string()
}

fn default_memos_slot() -> String {
    "memos".to_string()
}

fn default_true() -> bool {
    true
}
