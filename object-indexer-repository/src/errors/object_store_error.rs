//! Object store error types.
//!
//! This module defines the error types that can occur while fetching object
//! content from the object store.

use thiserror::Error;

/// Errors that can occur during object store operations.
#[derive(Error, Debug, Clone)]
pub enum ObjectStoreError {
    /// Failed to reach the object store endpoint.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The requested object does not exist.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// The object store rejected the request.
    #[error("Request error: {0}")]
    RequestError(String),

    /// Failed to read the object body as text.
    #[error("Read error: {0}")]
    ReadError(String),
}

impl ObjectStoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::ReadError(msg.into())
    }
}
