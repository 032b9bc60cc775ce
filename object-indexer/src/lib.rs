//! # Object Indexer
//!
//! Main library for the object storage search indexer.
//!
//! This crate provides the entry point and configuration for running
//! the batch indexing pipeline.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] object_indexer_pipeline::PipelineError),

    /// Object store error.
    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] object_indexer_repository::ObjectStoreError),

    /// Index sync error.
    #[error("Index sync error: {0}")]
    IndexSyncError(#[from] object_indexer_repository::IndexSyncError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
