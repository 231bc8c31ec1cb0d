//! Read-only projections over a copy of the document forest.

pub mod snapshot;
pub mod tree;

pub use snapshot::DocumentSnapshot;
