//! # docshelf-core
//!
//! Core crate for docshelf. Contains the persistence trait, configuration
//! schemas, typed identifiers, the response envelope, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other docshelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
