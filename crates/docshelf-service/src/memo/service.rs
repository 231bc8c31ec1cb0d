//! Memo CRUD over its own slot.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;
use docshelf_core::types::MemoId;
use docshelf_entity::document::DocumentRecord;
use docshelf_entity::memo::MemoRecord;

use super::content;
use crate::persist::save_or_persistence_error;

/// Manages generated study summaries.
#[derive(Debug)]
pub struct MemoService {
    memos: RwLock<Vec<MemoRecord>>,
    persistence: Arc<dyn SnapshotStore<MemoRecord>>,
}

impl MemoService {
    /// Load memos from the slot.
    pub async fn load(persistence: Arc<dyn SnapshotStore<MemoRecord>>) -> AppResult<Self> {
        let memos = persistence.load_all().await?;
        Ok(Self {
            memos: RwLock::new(memos),
            persistence,
        })
    }

    /// All memos, oldest first.
    pub async fn list(&self) -> Vec<MemoRecord> {
        self.memos.read().await.clone()
    }

    /// Look up a memo.
    pub async fn get(&self, id: &MemoId) -> AppResult<MemoRecord> {
        self.memos
            .read()
            .await
            .iter()
            .find(|memo| &memo.id == id)
            .cloned()
            .ok_or_else(|| memo_not_found(id))
    }

    /// Generate a summary of `file` and store it.
    pub async fn create(&self, file: &DocumentRecord) -> AppResult<MemoRecord> {
        if !file.is_file() {
            return Err(AppError::validation(format!(
                "'{}' is a folder; memos can only be generated from files",
                file.name
            )));
        }

        let now = Utc::now();
        let extension = file.extension();
        let memo = MemoRecord {
            id: MemoId::generate("memo"),
            title: format!("Study summary: {}", file.name),
            source_file_id: file.id.clone(),
            source_file_name: file.name.clone(),
            content: content::generate(&file.name, extension.as_deref()),
            created_at: now,
            updated_at: now,
        };

        let mut memos = self.memos.write().await;
        let mut working = memos.clone();
        working.push(memo.clone());
        save_or_persistence_error(self.persistence.as_ref(), &working).await?;
        *memos = working;

        info!(memo_id = %memo.id, source_file_id = %file.id, "Memo created");
        Ok(memo)
    }

    /// Remove a memo, returning it.
    pub async fn delete(&self, id: &MemoId) -> AppResult<MemoRecord> {
        let mut memos = self.memos.write().await;
        let position = memos
            .iter()
            .position(|memo| &memo.id == id)
            .ok_or_else(|| memo_not_found(id))?;

        let mut working = memos.clone();
        let removed = working.remove(position);
        save_or_persistence_error(self.persistence.as_ref(), &working).await?;
        *memos = working;

        info!(memo_id = %id, "Memo deleted");
        Ok(removed)
    }
}

fn memo_not_found(id: &MemoId) -> AppError {
    AppError::not_found(format!("Memo '{id}' not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_core::error::ErrorKind;
    use docshelf_entity::document::UploadDescriptor;
    use docshelf_persistence::MemoryStore;

    use crate::persist::tests::UnencodableStore;

    fn pdf() -> DocumentRecord {
        DocumentRecord::new_file(
            &UploadDescriptor::new("Lecture 3.pdf", 2048),
            "Lecture 3.pdf".into(),
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let slot = MemoryStore::new("memos");
        let service = MemoService::load(Arc::new(slot.clone())).await.unwrap();
        let file = pdf();

        let memo = service.create(&file).await.unwrap();
        assert_eq!(memo.title, "Study summary: Lecture 3.pdf");
        assert_eq!(memo.source_file_id, file.id);
        assert!(memo.content.contains("Key Points"));
        assert_eq!(service.get(&memo.id).await.unwrap(), memo);
        assert_eq!(slot.load_all().await.unwrap(), vec![memo.clone()]);

        let removed = service.delete(&memo.id).await.unwrap();
        assert_eq!(removed.id, memo.id);
        assert!(service.list().await.is_empty());

        let err = service.delete(&memo.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rejects_folders() {
        let service = MemoService::load(Arc::new(MemoryStore::new("memos")))
            .await
            .unwrap();
        let folder = DocumentRecord::new_folder("Notes".into(), None, Utc::now());

        let err = service.create(&folder).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_list() {
        let slot = MemoryStore::new("memos");
        let service = MemoService::load(Arc::new(slot.clone())).await.unwrap();
        slot.fail_next_saves(1);

        let err = service.create(&pdf()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Persistence);
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_unencodable_save_reports_persistence() {
        let service = MemoService::load(Arc::new(UnencodableStore)).await.unwrap();

        let err = service.create(&pdf()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Persistence);
        assert!(service.list().await.is_empty());
    }
}
