//! Upload descriptor passed to file creation.

use serde::{Deserialize, Serialize};

/// What the caller knows about a file being added to the forest.
///
/// Only metadata travels through the store; file contents are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    /// Original file name, including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Explicit media type; derived from the extension when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl UploadDescriptor {
    /// Describe a file by name and size.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: None,
        }
    }

    /// Override the derived media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// The explicit media type, or the extension, or an empty string.
    pub fn resolved_media_type(&self) -> String {
        self.media_type
            .clone()
            .or_else(|| extension_of(self.name.trim()))
            .unwrap_or_default()
    }
}

/// Lower-cased text after the last dot, unless the dot leads the name.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => Some(name[idx + 1..].to_lowercase()),
        _ => None,
    }
}
