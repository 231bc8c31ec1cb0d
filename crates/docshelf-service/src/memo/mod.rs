//! Generated study summaries attached to files.

pub mod content;
pub mod service;

pub use service::MemoService;
