//! Structural checks over a loaded collection.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use docshelf_core::types::DocumentId;
use docshelf_entity::document::DocumentRecord;

use super::index::RecordIndex;

/// A violated forest invariant found in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "camelCase")]
pub enum IntegrityIssue {
    /// Two or more records share an id.
    DuplicateId {
        /// The repeated id.
        id: DocumentId,
    },
    /// A parent id does not resolve to any record.
    DanglingParent {
        /// The orphaned record.
        id: DocumentId,
        /// The missing parent.
        parent_id: DocumentId,
    },
    /// A record's parent is a file.
    FileParent {
        /// The record.
        id: DocumentId,
        /// The file acting as parent.
        parent_id: DocumentId,
    },
    /// A record is its own ancestor.
    Cycle {
        /// A record on the cycle.
        id: DocumentId,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate id {id}"),
            Self::DanglingParent { id, parent_id } => {
                write!(f, "{id} points at missing parent {parent_id}")
            }
            Self::FileParent { id, parent_id } => {
                write!(f, "{id} is parented by file {parent_id}")
            }
            Self::Cycle { id } => write!(f, "{id} is its own ancestor"),
        }
    }
}

/// Report every invariant violation in `records`. Empty means healthy.
pub fn check_integrity(records: &[DocumentRecord]) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            issues.push(IntegrityIssue::DuplicateId {
                id: record.id.clone(),
            });
        }
    }

    let index = RecordIndex::build(records);
    for record in records {
        let Some(parent_id) = record.parent_id.as_ref() else {
            continue;
        };
        match index.get(parent_id) {
            None => issues.push(IntegrityIssue::DanglingParent {
                id: record.id.clone(),
                parent_id: parent_id.clone(),
            }),
            Some(parent) if !parent.is_folder() => issues.push(IntegrityIssue::FileParent {
                id: record.id.clone(),
                parent_id: parent_id.clone(),
            }),
            Some(_) => {}
        }
        if index
            .ancestors_from(Some(parent_id))
            .any(|ancestor| ancestor.id == record.id)
        {
            issues.push(IntegrityIssue::Cycle {
                id: record.id.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docshelf_entity::document::UploadDescriptor;

    fn folder(id: &str, parent: Option<&str>) -> DocumentRecord {
        let mut record =
            DocumentRecord::new_folder(id.to_string(), parent.map(DocumentId::from), Utc::now());
        record.id = DocumentId::from(id);
        record
    }

    #[test]
    fn test_healthy_forest_has_no_issues() {
        let records = vec![folder("a", None), folder("b", Some("a")), folder("c", None)];
        assert!(check_integrity(&records).is_empty());
    }

    #[test]
    fn test_reports_each_kind_of_damage() {
        let mut file = DocumentRecord::new_file(
            &UploadDescriptor::new("f.pdf", 1),
            "f.pdf".into(),
            None,
            Utc::now(),
        );
        file.id = DocumentId::from("f");

        let records = vec![
            folder("a", None),
            folder("a", None),
            folder("orphan", Some("gone")),
            folder("under-file", Some("f")),
            file,
            folder("x", Some("y")),
            folder("y", Some("x")),
        ];
        let issues = check_integrity(&records);

        assert!(issues.contains(&IntegrityIssue::DuplicateId { id: "a".into() }));
        assert!(issues.contains(&IntegrityIssue::DanglingParent {
            id: "orphan".into(),
            parent_id: "gone".into()
        }));
        assert!(issues.contains(&IntegrityIssue::FileParent {
            id: "under-file".into(),
            parent_id: "f".into()
        }));
        assert!(issues.contains(&IntegrityIssue::Cycle { id: "x".into() }));
        assert!(issues.contains(&IntegrityIssue::Cycle { id: "y".into() }));
    }
}
