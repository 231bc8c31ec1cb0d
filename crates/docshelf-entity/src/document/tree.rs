//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use docshelf_core::types::DocumentId;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: DocumentId,
    /// Folder name.
    pub name: String,
    /// Depth level (0 for roots).
    pub depth: usize,
    /// Number of child folders.
    pub child_count: u64,
    /// Number of files directly in this folder.
    pub file_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

/// The whole folder forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTree {
    /// The root folder nodes.
    pub roots: Vec<FolderNode>,
    /// Files that sit at the root level.
    pub root_file_count: u64,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            root_file_count: 0,
            total_folders: 0,
        }
    }
}
