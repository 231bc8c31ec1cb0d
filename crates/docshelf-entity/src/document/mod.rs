//! Document (file and folder) domain entities.

pub mod kind;
pub mod model;
pub mod tree;
pub mod upload;

pub use kind::{DocumentKind, ProcessingStatus};
pub use model::DocumentRecord;
pub use tree::{FolderNode, FolderTree};
pub use upload::UploadDescriptor;
