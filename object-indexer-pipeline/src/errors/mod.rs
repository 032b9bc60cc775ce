//! Error types for the object indexer pipeline.

use thiserror::Error;

use object_indexer_repository::{IndexSyncError, ObjectStoreError};

/// Errors that can occur in the object indexer pipeline.
///
/// There is no local recovery anywhere in the pipeline: the first error of
/// any variant aborts the current invocation.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The notification payload could not be decoded.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Object content could not be fetched for a non-delete event.
    #[error("Content fetch error: {0}")]
    ContentFetch(#[from] ObjectStoreError),

    /// A document could not be built or staged.
    #[error("Staging error: {0}")]
    Staging(String),

    /// The batch commit failed in transport or protocol.
    #[error("Commit error: {0}")]
    Commit(#[from] IndexSyncError),
}

impl PipelineError {
    /// Create a malformed payload error.
    pub fn malformed_payload(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Create a staging error.
    pub fn staging(msg: impl Into<String>) -> Self {
        Self::Staging(msg.into())
    }
}
