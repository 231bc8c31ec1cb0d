//! # docshelf-entity
//!
//! Domain entity models for docshelf. Every struct in this crate is a
//! record held in a persisted collection or a value object passed into the
//! service layer. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`, and serialize in the camelCase shape the front end reads.

pub mod document;
pub mod memo;
