//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::DocumentId;

use super::kind::{DocumentKind, ProcessingStatus};
use super::upload::UploadDescriptor;

/// A file or folder in the document forest.
///
/// The file-only fields (`size`, `media_type`, `status`, `progress`) are
/// `None` for folders and omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Display name.
    pub name: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Parent folder (None for roots).
    pub parent_id: Option<DocumentId>,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Media type, usually the lower-cased file extension.
    #[serde(default, alias = "fileType", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Processing state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcessingStatus>,
    /// Processing progress, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last renamed, moved, or updated.
    pub updated_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Build a new folder record with a fresh id.
    pub fn new_folder(name: String, parent_id: Option<DocumentId>, now: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::Folder.as_str()),
            name,
            kind: DocumentKind::Folder,
            parent_id,
            size: None,
            media_type: None,
            status: None,
            progress: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a new file record with a fresh id.
    ///
    /// No bytes are transferred, so the record starts out completed.
    pub fn new_file(
        descriptor: &UploadDescriptor,
        name: String,
        parent_id: Option<DocumentId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::File.as_str()),
            media_type: Some(descriptor.resolved_media_type()),
            name,
            kind: DocumentKind::File,
            parent_id,
            size: Some(descriptor.size),
            status: Some(ProcessingStatus::Completed),
            progress: Some(100),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == DocumentKind::Folder
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.kind == DocumentKind::File
    }

    /// Check if this is a root record (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        super::upload::extension_of(&self.name)
    }
}
