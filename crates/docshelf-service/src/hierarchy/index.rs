//! Lookup indexes over a flat record slice.
//!
//! Both walks here are bounded by a visited set, so they terminate even when
//! loaded data already contains a parent cycle.

use std::collections::{HashMap, HashSet};

use docshelf_core::types::DocumentId;
use docshelf_entity::document::DocumentRecord;

/// Id -> record lookup.
#[derive(Debug)]
pub struct RecordIndex<'a> {
    by_id: HashMap<&'a DocumentId, &'a DocumentRecord>,
}

impl<'a> RecordIndex<'a> {
    /// Index the given records. On duplicate ids the first record wins.
    pub fn build(records: &'a [DocumentRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.entry(&record.id).or_insert(record);
        }
        Self { by_id }
    }

    /// Look up a record.
    pub fn get(&self, id: &DocumentId) -> Option<&'a DocumentRecord> {
        self.by_id.get(id).copied()
    }

    /// Walk from `start` (inclusive) up through its ancestors.
    pub fn ancestors_from(&self, start: Option<&'a DocumentId>) -> AncestorWalk<'_, 'a> {
        AncestorWalk {
            index: self,
            next: start,
            seen: HashSet::new(),
        }
    }
}

/// Iterator over a record and its ancestors, nearest first.
///
/// Ends at a root, at a parent id that does not resolve, or at the first
/// repeated record.
#[derive(Debug)]
pub struct AncestorWalk<'i, 'a> {
    index: &'i RecordIndex<'a>,
    next: Option<&'a DocumentId>,
    seen: HashSet<&'a DocumentId>,
}

impl<'a> Iterator for AncestorWalk<'_, 'a> {
    type Item = &'a DocumentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        if !self.seen.insert(id) {
            return None;
        }
        let record = self.index.get(id)?;
        self.next = record.parent_id.as_ref();
        Some(record)
    }
}

/// Parent -> children adjacency map.
#[derive(Debug)]
pub struct ChildIndex<'a> {
    children: HashMap<Option<&'a DocumentId>, Vec<&'a DocumentRecord>>,
}

impl<'a> ChildIndex<'a> {
    /// Index the given records by parent, keeping insertion order.
    pub fn build(records: &'a [DocumentRecord]) -> Self {
        let mut children: HashMap<Option<&'a DocumentId>, Vec<&'a DocumentRecord>> =
            HashMap::new();
        for record in records {
            children
                .entry(record.parent_id.as_ref())
                .or_default()
                .push(record);
        }
        Self { children }
    }

    /// Direct children of `parent` (roots when `None`).
    pub fn children(&self, parent: Option<&'a DocumentId>) -> &[&'a DocumentRecord] {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of `root` and everything below it, depth-first with every
    /// record listed after all of its descendants.
    pub fn subtree_post_order(&self, root: &'a DocumentId) -> Vec<&'a DocumentId> {
        let mut order = Vec::new();
        let mut seen: HashSet<&'a DocumentId> = HashSet::new();
        let mut stack: Vec<(&'a DocumentId, bool)> = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if !seen.insert(id) {
                continue;
            }
            stack.push((id, true));
            for child in self.children(Some(id)) {
                if !seen.contains(&child.id) {
                    stack.push((&child.id, false));
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn folder(id: &str, parent: Option<&str>) -> DocumentRecord {
        let mut record =
            DocumentRecord::new_folder(id.to_string(), parent.map(DocumentId::from), Utc::now());
        record.id = DocumentId::from(id);
        record
    }

    #[test]
    fn test_ancestor_walk_is_nearest_first() {
        let records = vec![folder("a", None), folder("b", Some("a")), folder("c", Some("b"))];
        let index = RecordIndex::build(&records);
        let c = DocumentId::from("c");

        let names: Vec<_> = index
            .ancestors_from(Some(&c))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn test_ancestor_walk_stops_at_broken_link() {
        let records = vec![folder("b", Some("missing")), folder("c", Some("b"))];
        let index = RecordIndex::build(&records);
        let c = DocumentId::from("c");

        assert_eq!(index.ancestors_from(Some(&c)).count(), 2);
    }

    #[test]
    fn test_ancestor_walk_terminates_on_corrupt_cycle() {
        let records = vec![folder("x", Some("y")), folder("y", Some("x"))];
        let index = RecordIndex::build(&records);
        let x = DocumentId::from("x");

        assert_eq!(index.ancestors_from(Some(&x)).count(), 2);
    }

    #[test]
    fn test_children_lookup_by_parent() {
        let records = vec![
            folder("a", None),
            folder("b", Some("a")),
            folder("c", None),
            folder("d", Some("a")),
        ];
        let index = ChildIndex::build(&records);

        let roots: Vec<_> = index.children(None).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(roots, ["a", "c"]);

        let under_a: Vec<_> = index
            .children(Some(&records[0].id))
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(under_a, ["b", "d"]);

        assert!(index.children(Some(&records[2].id)).is_empty());
    }

    #[test]
    fn test_post_order_lists_children_first() {
        let records = vec![
            folder("a", None),
            folder("b", Some("a")),
            folder("c", Some("b")),
            folder("d", Some("a")),
            folder("other", None),
        ];
        let index = ChildIndex::build(&records);
        let a = DocumentId::from("a");

        let order: Vec<_> = index
            .subtree_post_order(&a)
            .into_iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order.last(), Some(&"a"));
        let pos = |name: &str| order.iter().position(|id| *id == name).unwrap();
        assert!(pos("c") < pos("b"));
        assert!(!order.contains(&"other"));
    }

    #[test]
    fn test_post_order_terminates_on_corrupt_cycle() {
        let records = vec![folder("x", Some("y")), folder("y", Some("x"))];
        let index = ChildIndex::build(&records);
        let x = DocumentId::from("x");

        assert_eq!(index.subtree_post_order(&x).len(), 2);
    }
}
