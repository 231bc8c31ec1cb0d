//! Immutable view of the forest for listing and navigation.

use serde::Serialize;

use docshelf_core::types::DocumentId;
use docshelf_entity::document::{DocumentRecord, FolderTree};

use super::tree::build_tree;
use crate::hierarchy::index::{ChildIndex, RecordIndex};

/// An owned copy of the document collection.
///
/// Every projection is pure and tolerates damaged data: broken parent
/// links end a walk early and parent cycles never loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentSnapshot {
    records: Vec<DocumentRecord>,
}

impl DocumentSnapshot {
    /// Wrap a collection.
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Take the records out.
    pub fn into_records(self) -> Vec<DocumentRecord> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one record.
    pub fn get(&self, id: &DocumentId) -> Option<&DocumentRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Direct children of `parent_id` (roots when `None`).
    pub fn children_of(&self, parent_id: Option<&DocumentId>) -> Vec<&DocumentRecord> {
        self.records
            .iter()
            .filter(|record| record.parent_id.as_ref() == parent_id)
            .collect()
    }

    /// Ancestor records of `id`, outermost first, excluding `id` itself.
    ///
    /// Empty for roots and unknown ids. Stops at the first parent link
    /// that does not resolve.
    pub fn breadcrumbs(&self, id: &DocumentId) -> Vec<&DocumentRecord> {
        let index = RecordIndex::build(&self.records);
        let Some(record) = index.get(id) else {
            return Vec::new();
        };

        let mut trail: Vec<&DocumentRecord> = index
            .ancestors_from(record.parent_id.as_ref())
            .take_while(|ancestor| &ancestor.id != id)
            .collect();
        trail.reverse();
        trail
    }

    /// Names along [`breadcrumbs`](Self::breadcrumbs).
    pub fn ancestors_of(&self, id: &DocumentId) -> Vec<String> {
        self.breadcrumbs(id)
            .into_iter()
            .map(|record| record.name.clone())
            .collect()
    }

    /// Every folder.
    pub fn folders_only(&self) -> Vec<&DocumentRecord> {
        self.records.iter().filter(|r| r.is_folder()).collect()
    }

    /// Every file.
    pub fn files_only(&self) -> Vec<&DocumentRecord> {
        self.records.iter().filter(|r| r.is_file()).collect()
    }

    /// Everything below `id`, depth-first with children listed before
    /// their folder. Empty for files and unknown ids.
    pub fn descendants_of(&self, id: &DocumentId) -> Vec<&DocumentRecord> {
        let records = RecordIndex::build(&self.records);
        let Some(root) = records.get(id) else {
            return Vec::new();
        };

        let children = ChildIndex::build(&self.records);
        children
            .subtree_post_order(&root.id)
            .into_iter()
            .filter(|descendant| *descendant != id)
            .filter_map(|descendant| records.get(descendant))
            .collect()
    }

    /// Nested folder forest with per-folder counts.
    pub fn tree(&self) -> FolderTree {
        build_tree(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docshelf_entity::document::UploadDescriptor;

    fn folder(id: &str, parent: Option<&str>) -> DocumentRecord {
        let mut record =
            DocumentRecord::new_folder(id.to_uppercase(), parent.map(DocumentId::from), Utc::now());
        record.id = DocumentId::from(id);
        record
    }

    fn file(id: &str, parent: Option<&str>) -> DocumentRecord {
        let mut record = DocumentRecord::new_file(
            &UploadDescriptor::new(format!("{id}.pdf"), 1),
            format!("{id}.pdf"),
            parent.map(DocumentId::from),
            Utc::now(),
        );
        record.id = DocumentId::from(id);
        record
    }

    fn sample() -> DocumentSnapshot {
        DocumentSnapshot::new(vec![
            folder("a", None),
            folder("b", Some("a")),
            file("f", Some("b")),
            file("g", None),
        ])
    }

    #[test]
    fn test_ancestors_root_first() {
        let snapshot = sample();
        assert_eq!(snapshot.ancestors_of(&"f".into()), ["A", "B"]);
        assert!(snapshot.ancestors_of(&"a".into()).is_empty());
        assert!(snapshot.ancestors_of(&"missing".into()).is_empty());
    }

    #[test]
    fn test_ancestors_partial_on_broken_link() {
        let snapshot = DocumentSnapshot::new(vec![
            folder("b", Some("gone")),
            file("f", Some("b")),
        ]);
        assert_eq!(snapshot.ancestors_of(&"f".into()), ["B"]);
    }

    #[test]
    fn test_ancestors_bounded_on_cycle() {
        let snapshot = DocumentSnapshot::new(vec![
            folder("x", Some("y")),
            folder("y", Some("x")),
            file("f", Some("x")),
        ]);
        assert_eq!(snapshot.ancestors_of(&"x".into()), ["Y"]);
        assert_eq!(snapshot.ancestors_of(&"f".into()), ["Y", "X"]);
    }

    #[test]
    fn test_kind_filters() {
        let snapshot = sample();
        assert_eq!(snapshot.folders_only().len(), 2);
        assert_eq!(snapshot.files_only().len(), 2);
        assert_eq!(snapshot.children_of(None).len(), 2);
    }

    #[test]
    fn test_descendants() {
        let snapshot = sample();
        let ids: Vec<_> = snapshot
            .descendants_of(&"a".into())
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["f", "b"]);
        assert!(snapshot.descendants_of(&"g".into()).is_empty());
    }
}
