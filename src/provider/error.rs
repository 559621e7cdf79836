//! Metadata service error types.

use thiserror::Error;

use crate::model::TableId;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors surfaced by the metadata fetch layer.
///
/// The augmentation pipeline propagates these unmodified: no retry, no
/// default substitution, no logging of user-facing messages. A single
/// failed fetch fails the enclosing augmentation call.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The underlying transport call failed.
    #[error("metadata fetch failed: {0}")]
    FetchFailed(String),

    /// The service has no table with the requested id.
    #[error("table not found: {0}")]
    TableNotFound(TableId),

    /// The payload could not be deserialized.
    #[error("failed to deserialize metadata payload: {0}")]
    DeserializeFailed(#[source] serde_json::Error),

    /// The service returned an error response.
    #[error("metadata service error: {message} (code: {code})")]
    Remote {
        /// Error code from the service.
        code: String,
        /// Error message from the service.
        message: String,
    },
}

impl MetadataError {
    /// Create a transport-level fetch failure.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchFailed(message.into())
    }

    /// Create a remote error from an error response.
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if this error means the table simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound(_))
    }
}

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializeFailed(err)
    }
}
