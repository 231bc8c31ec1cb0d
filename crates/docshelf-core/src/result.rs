//! Convenience result type alias for docshelf.

use crate::error::AppError;

/// A specialized `Result` type for docshelf operations.
///
/// Every store, adapter, and service operation returns this so that callers
/// can display the failure and retry instead of aborting.
pub type AppResult<T> = Result<T, AppError>;
