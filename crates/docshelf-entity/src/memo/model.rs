//! Memo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{DocumentId, MemoId};

/// A generated study summary derived from one file.
///
/// The memo keeps the source file's id and name as they were at creation
/// time; it outlives the file if the file is later deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoRecord {
    /// Unique memo identifier.
    pub id: MemoId,
    /// Display title.
    pub title: String,
    /// The file the summary was generated from.
    pub source_file_id: DocumentId,
    /// The file name at generation time.
    pub source_file_name: String,
    /// Markdown body.
    pub content: String,
    /// When the memo was created.
    pub created_at: DateTime<Utc>,
    /// When the memo was last updated.
    pub updated_at: DateTime<Utc>,
}
