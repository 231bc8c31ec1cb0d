//! Memo (generated study summary) domain entities.

pub mod model;

pub use model::MemoRecord;
