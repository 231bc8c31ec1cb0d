//! # docshelf-service
//!
//! Business logic for docshelf. The [`HierarchyStore`] owns the document
//! forest and enforces its invariants, [`DocumentSnapshot`] offers pure
//! read projections over it, and [`MemoService`] manages generated
//! summaries.
//!
//! Services follow constructor injection: the persistence slot is handed
//! in as an `Arc<dyn SnapshotStore<_>>` at construction time.

pub mod hierarchy;
pub mod memo;
mod persist;
pub mod query;

pub use hierarchy::{HierarchyStore, IntegrityIssue};
pub use memo::MemoService;
pub use query::DocumentSnapshot;
