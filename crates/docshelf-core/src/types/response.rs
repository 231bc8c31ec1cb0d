//! Tagged response envelope for user-facing output.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// Serializable success/failure envelope.
///
/// Mirrors the `{status, data, error}` shape the browser front end expects,
/// with the error kind carried as a machine-readable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub status: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Machine-readable error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    /// Human-readable message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            kind: None,
            error: None,
        }
    }

    /// Wrap a failure.
    pub fn failure(err: &AppError) -> Self {
        Self {
            status: false,
            data: None,
            kind: Some(err.kind),
            error: Some(err.message.clone()),
        }
    }
}

impl<T> From<AppResult<T>> for Envelope<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failure(&err),
        }
    }
}
