//! Core type definitions used across the docshelf workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::Envelope;
