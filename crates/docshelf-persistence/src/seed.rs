//! Sample documents written to a fresh document slot.

use chrono::{DateTime, TimeZone, Utc};

use docshelf_core::types::DocumentId;
use docshelf_entity::document::{DocumentKind, DocumentRecord, ProcessingStatus};

/// Two root folders and three root files, matching the demo library shown
/// to first-time users.
pub fn sample_documents() -> Vec<DocumentRecord> {
    vec![
        folder("folder-1", "Course Material", at(2024, 1, 15, 10, 30)),
        folder("folder-2", "Assignment Submissions", at(2024, 1, 10, 14, 20)),
        file(
            "file-1",
            "Data Structures and Algorithms.pdf",
            5_242_880,
            "pdf",
            at(2024, 1, 20, 9, 15),
        ),
        file(
            "file-2",
            "Machine Learning Notes.docx",
            1_048_576,
            "docx",
            at(2024, 1, 18, 16, 45),
        ),
        file(
            "file-3",
            "Lab Data.xlsx",
            2_097_152,
            "xlsx",
            at(2024, 1, 12, 11, 30),
        ),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn folder(id: &str, name: &str, created_at: DateTime<Utc>) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId::from(id),
        name: name.to_string(),
        kind: DocumentKind::Folder,
        parent_id: None,
        size: None,
        media_type: None,
        status: None,
        progress: None,
        created_at,
        updated_at: created_at,
    }
}

fn file(
    id: &str,
    name: &str,
    size: u64,
    media_type: &str,
    created_at: DateTime<Utc>,
) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId::from(id),
        name: name.to_string(),
        kind: DocumentKind::File,
        parent_id: None,
        size: Some(size),
        media_type: Some(media_type.to_string()),
        status: Some(ProcessingStatus::Completed),
        progress: None,
        created_at,
        updated_at: created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_samples_are_roots_with_unique_ids() {
        let samples = sample_documents();
        let ids: HashSet<_> = samples.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), samples.len());
        assert!(samples.iter().all(|d| d.is_root()));
        assert_eq!(samples.iter().filter(|d| d.is_folder()).count(), 2);
    }
}
