//! The document hierarchy store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;
use docshelf_core::types::DocumentId;
use docshelf_entity::document::{DocumentRecord, ProcessingStatus, UploadDescriptor};

use super::index::{ChildIndex, RecordIndex};
use super::integrity::{IntegrityIssue, check_integrity};
use super::validation::{validate_folder_name, validate_name};
use crate::persist::save_or_persistence_error;
use crate::query::DocumentSnapshot;

/// Owns the document forest and every mutation of it.
///
/// Each mutation runs under the write lock: it validates against the
/// current collection, applies the change to a working copy, saves the
/// whole working copy, and only then swaps it in. A failed save leaves the
/// in-memory collection exactly as it was.
#[derive(Debug)]
pub struct HierarchyStore {
    records: RwLock<Vec<DocumentRecord>>,
    persistence: Arc<dyn SnapshotStore<DocumentRecord>>,
}

impl HierarchyStore {
    /// Load the collection from the slot. A slot that was never written
    /// yields an empty forest.
    pub async fn load(persistence: Arc<dyn SnapshotStore<DocumentRecord>>) -> AppResult<Self> {
        let records = persistence.load_all().await?;
        Ok(Self::from_records(records, persistence))
    }

    /// Load the collection, first writing `seed` if the slot was never
    /// written.
    pub async fn load_or_seed(
        persistence: Arc<dyn SnapshotStore<DocumentRecord>>,
        seed: Vec<DocumentRecord>,
    ) -> AppResult<Self> {
        if persistence.exists().await? {
            return Self::load(persistence).await;
        }

        persistence.save_all(&seed).await?;
        info!(
            slot = persistence.slot(),
            count = seed.len(),
            "Seeded document slot"
        );
        Ok(Self::from_records(seed, persistence))
    }

    fn from_records(
        records: Vec<DocumentRecord>,
        persistence: Arc<dyn SnapshotStore<DocumentRecord>>,
    ) -> Self {
        for issue in check_integrity(&records) {
            warn!(slot = persistence.slot(), %issue, "Document slot integrity problem");
        }
        Self {
            records: RwLock::new(records),
            persistence,
        }
    }

    /// Records whose parent is `parent_id` (roots when `None`), in
    /// insertion order.
    pub async fn list(&self, parent_id: Option<&DocumentId>) -> Vec<DocumentRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.parent_id.as_ref() == parent_id)
            .cloned()
            .collect()
    }

    /// Look up one record.
    pub async fn get(&self, id: &DocumentId) -> AppResult<DocumentRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// An owned copy of the whole collection for read-only queries.
    pub async fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot::new(self.records.read().await.clone())
    }

    /// Problems found in the current collection.
    pub async fn integrity_report(&self) -> Vec<IntegrityIssue> {
        check_integrity(&self.records.read().await)
    }

    /// Create a folder under `parent_id` (at the root when `None`).
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<DocumentId>,
    ) -> AppResult<DocumentRecord> {
        let name = validate_folder_name(name)?;

        let mut records = self.records.write().await;
        require_folder_parent(&records, parent_id.as_ref())?;

        let folder = DocumentRecord::new_folder(name, parent_id, Utc::now());
        let mut working = records.clone();
        working.push(folder.clone());
        self.commit(&mut records, working).await?;

        info!(
            document_id = %folder.id,
            parent_id = ?folder.parent_id.as_ref().map(DocumentId::as_str),
            name = %folder.name,
            "Folder created"
        );
        Ok(folder)
    }

    /// Register an uploaded file under `parent_id` (at the root when `None`).
    ///
    /// Only the descriptor is recorded; the record is immediately
    /// completed.
    pub async fn create_file(
        &self,
        descriptor: UploadDescriptor,
        parent_id: Option<DocumentId>,
    ) -> AppResult<DocumentRecord> {
        let name = validate_name(&descriptor.name)?;

        let mut records = self.records.write().await;
        require_folder_parent(&records, parent_id.as_ref())?;

        let file = DocumentRecord::new_file(&descriptor, name, parent_id, Utc::now());
        let mut working = records.clone();
        working.push(file.clone());
        self.commit(&mut records, working).await?;

        info!(
            document_id = %file.id,
            parent_id = ?file.parent_id.as_ref().map(DocumentId::as_str),
            name = %file.name,
            size = descriptor.size,
            "File uploaded"
        );
        Ok(file)
    }

    /// Rename a file or folder.
    pub async fn rename(&self, id: &DocumentId, new_name: &str) -> AppResult<DocumentRecord> {
        let mut records = self.records.write().await;
        let position = position_of(&records, id)?;
        let name = validate_name(new_name)?;

        let mut working = records.clone();
        let record = &mut working[position];
        record.name = name;
        record.updated_at = Utc::now();
        let renamed = record.clone();
        self.commit(&mut records, working).await?;

        info!(document_id = %id, name = %renamed.name, "Document renamed");
        Ok(renamed)
    }

    /// Move a record under `target` (to the root when `None`).
    ///
    /// Fails with [`Cycle`](docshelf_core::error::ErrorKind::Cycle) when the
    /// target is the record itself or one of its descendants.
    pub async fn move_to(
        &self,
        id: &DocumentId,
        target: Option<DocumentId>,
    ) -> AppResult<DocumentRecord> {
        let mut records = self.records.write().await;
        let position = position_of(&records, id)?;

        if let Some(target_id) = target.as_ref() {
            let index = RecordIndex::build(&records);
            let target_record = index.get(target_id).ok_or_else(|| not_found(target_id))?;

            if index
                .ancestors_from(Some(&target_record.id))
                .any(|ancestor| &ancestor.id == id)
            {
                return Err(AppError::cycle(format!(
                    "Cannot move '{id}' into its own descendant '{target_id}'"
                )));
            }
            if !target_record.is_folder() {
                return Err(AppError::not_found(format!(
                    "Target '{target_id}' is not a folder"
                )));
            }
        }

        let mut working = records.clone();
        let record = &mut working[position];
        record.parent_id = target;
        record.updated_at = Utc::now();
        let moved = record.clone();
        self.commit(&mut records, working).await?;

        info!(
            document_id = %id,
            parent_id = ?moved.parent_id.as_ref().map(DocumentId::as_str),
            "Document moved"
        );
        Ok(moved)
    }

    /// Delete a record. Deleting a folder removes its whole subtree.
    ///
    /// Returns the record as it was before deletion.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<DocumentRecord> {
        let mut records = self.records.write().await;
        let position = position_of(&records, id)?;
        let deleted = records[position].clone();

        let doomed: HashSet<DocumentId> = {
            let children = ChildIndex::build(&records);
            children
                .subtree_post_order(&records[position].id)
                .into_iter()
                .cloned()
                .collect()
        };

        let mut working = records.clone();
        working.retain(|record| !doomed.contains(&record.id));
        self.commit(&mut records, working).await?;

        info!(
            document_id = %id,
            kind = %deleted.kind,
            removed = doomed.len(),
            "Document deleted"
        );
        Ok(deleted)
    }

    /// Record processing progress for a file.
    pub async fn update_status(
        &self,
        id: &DocumentId,
        status: ProcessingStatus,
        progress: Option<u8>,
    ) -> AppResult<DocumentRecord> {
        if let Some(progress) = progress.filter(|p| *p > 100) {
            return Err(AppError::validation(format!(
                "Progress must be between 0 and 100, got {progress}"
            )));
        }

        let mut records = self.records.write().await;
        let position = position_of(&records, id)?;
        if !records[position].is_file() {
            return Err(AppError::validation(format!(
                "'{id}' is a folder; only files have a processing status"
            )));
        }

        let mut working = records.clone();
        let record = &mut working[position];
        record.status = Some(status);
        record.progress = match (progress, status) {
            (Some(progress), _) => Some(progress),
            (None, ProcessingStatus::Completed) => Some(100),
            (None, _) => record.progress,
        };
        record.updated_at = Utc::now();
        let updated = record.clone();
        self.commit(&mut records, working).await?;

        info!(
            document_id = %id,
            status = %status,
            progress = ?updated.progress,
            "Processing status updated"
        );
        Ok(updated)
    }

    /// Save `working` and, only on success, make it the live collection.
    async fn commit(
        &self,
        live: &mut Vec<DocumentRecord>,
        working: Vec<DocumentRecord>,
    ) -> AppResult<()> {
        save_or_persistence_error(self.persistence.as_ref(), &working).await?;
        *live = working;
        Ok(())
    }
}

fn not_found(id: &DocumentId) -> AppError {
    AppError::not_found(format!("Document '{id}' not found"))
}

fn position_of(records: &[DocumentRecord], id: &DocumentId) -> AppResult<usize> {
    records
        .iter()
        .position(|record| &record.id == id)
        .ok_or_else(|| not_found(id))
}

fn require_folder_parent(
    records: &[DocumentRecord],
    parent_id: Option<&DocumentId>,
) -> AppResult<()> {
    let Some(parent_id) = parent_id else {
        return Ok(());
    };
    match records.iter().find(|record| &record.id == parent_id) {
        Some(parent) if parent.is_folder() => Ok(()),
        Some(_) => Err(AppError::not_found(format!(
            "Parent '{parent_id}' is not a folder"
        ))),
        None => Err(AppError::not_found(format!(
            "Parent folder '{parent_id}' not found"
        ))),
    }
}
