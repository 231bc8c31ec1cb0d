//! Document forest ownership, validation, and mutation.

pub mod index;
pub mod integrity;
pub mod store;
pub mod validation;

pub use integrity::{IntegrityIssue, check_integrity};
pub use store::HierarchyStore;
