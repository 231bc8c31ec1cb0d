//! JSON file snapshot slot.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;

/// A slot stored as one pretty-printed JSON array on the local filesystem.
///
/// Saves go to a temporary sibling file which is then renamed over the
/// target, so a failed write leaves the previous snapshot intact.
pub struct JsonFileStore<T> {
    /// Slot name.
    slot: String,
    /// File backing the slot.
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a slot backed by the given file. The file need not exist yet.
    pub fn new(slot: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            slot: slot.into(),
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// File backing the slot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory of the slot file exists.
    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Failed to create slot directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.slot.clone(), self.path.clone())
    }
}

impl<T> fmt::Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("slot", &self.slot)
            .field("path", &self.path)
            .finish()
    }
}

#[async_trait]
impl<T> SnapshotStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn exists(&self) -> AppResult<bool> {
        fs::try_exists(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to probe slot '{}'", self.slot),
                e,
            )
        })
    }

    async fn load_all(&self) -> AppResult<Vec<T>> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(slot = %self.slot, "Slot not written yet, loading empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Failed to read slot '{}'", self.slot),
                    e,
                ));
            }
        };

        let items: Vec<T> = serde_json::from_slice(&data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Slot '{}' is not a valid JSON array: {e}", self.slot),
                e,
            )
        })?;

        debug!(slot = %self.slot, count = items.len(), "Loaded slot");
        Ok(items)
    }

    async fn save_all(&self, items: &[T]) -> AppResult<()> {
        self.ensure_parent().await?;

        let data = serde_json::to_vec_pretty(items)?;
        let temp = self.temp_path();

        fs::write(&temp, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to write slot '{}'", self.slot),
                e,
            )
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to commit slot '{}'", self.slot),
                e,
            )
        })?;

        debug!(slot = %self.slot, count = items.len(), bytes = data.len(), "Saved slot");
        Ok(())
    }
}
