//! Folder tree building.

use std::collections::HashSet;

use docshelf_core::types::DocumentId;
use docshelf_entity::document::{DocumentRecord, FolderNode, FolderTree};

use crate::hierarchy::index::ChildIndex;

/// Build the nested folder forest from a flat record list.
pub fn build_tree(records: &[DocumentRecord]) -> FolderTree {
    let children = ChildIndex::build(records);
    let mut visited = HashSet::new();

    let roots: Vec<FolderNode> = children
        .children(None)
        .iter()
        .filter(|record| record.is_folder())
        .filter_map(|record| build_node(*record, 0, &children, &mut visited))
        .collect();

    FolderTree {
        root_file_count: count_files(children.children(None)),
        total_folders: visited.len() as u64,
        roots,
    }
}

fn build_node<'a>(
    folder: &'a DocumentRecord,
    depth: usize,
    index: &ChildIndex<'a>,
    visited: &mut HashSet<&'a DocumentId>,
) -> Option<FolderNode> {
    if !visited.insert(&folder.id) {
        return None;
    }

    let entries = index.children(Some(&folder.id));
    let children: Vec<FolderNode> = entries
        .iter()
        .filter(|record| record.is_folder())
        .filter_map(|child| build_node(*child, depth + 1, index, visited))
        .collect();

    Some(FolderNode {
        id: folder.id.clone(),
        name: folder.name.clone(),
        depth,
        child_count: children.len() as u64,
        file_count: count_files(entries),
        children,
    })
}

fn count_files(entries: &[&DocumentRecord]) -> u64 {
    entries.iter().filter(|record| record.is_file()).count() as u64
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

    fn file(parent: Option<&str>) -> DocumentRecord {
        DocumentRecord::new_file(
            &UploadDescriptor::new("f.txt", 1),
            "f.txt".into(),
            parent.map(DocumentId::from),
            Utc::now(),
        )
    }

    #[test]
    fn test_tree_counts() {
        let records = vec![
            folder("a", None),
            folder("b", Some("a")),
            file(Some("a")),
            file(Some("b")),
            file(Some("b")),
            folder("c", None),
            file(None),
        ];
        let tree = build_tree(&records);

        assert_eq!(tree.total_folders, 3);
        assert_eq!(tree.root_file_count, 1);
        assert_eq!(tree.roots.len(), 2);

        let a = &tree.roots[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.child_count, 1);
        assert_eq!(a.file_count, 1);
        assert_eq!(a.children[0].depth, 1);
        assert_eq!(a.children[0].file_count, 2);
    }

    #[test]
    fn test_empty_forest() {
        let tree = build_tree(&[]);
        assert!(tree.roots.is_empty());
        assert_eq!(tree.total_folders, 0);
    }
}
