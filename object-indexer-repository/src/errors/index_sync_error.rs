//! Index sync error types.
//!
//! This module defines the error types that can occur while pushing document
//! batches to the search application.

use thiserror::Error;

/// Errors that can occur during document batch synchronization.
#[derive(Error, Debug, Clone)]
pub enum IndexSyncError {
    /// Failed to reach the search application host.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to serialize the batch for the push request.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The search application rejected the push request.
    #[error("Push error: {0}")]
    PushError(String),

    /// The push response could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl IndexSyncError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a push error.
    pub fn push(msg: impl Into<String>) -> Self {
        Self::PushError(msg.into())
    }

    /// Create a malformed response error.
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
