//! Document sync client trait definition.
//!
//! This module defines the abstract interface for pushing staged document
//! batches to the search application.

use async_trait::async_trait;

use crate::errors::IndexSyncError;
use crate::types::{CommitOutcome, StagedMutation};

/// Abstract interface for committing document batches to the search index.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait DocumentSyncClient: Send + Sync {
    /// Push a batch of staged mutations in a single bulk operation.
    ///
    /// The whole batch is sent in one network call, preserving staging
    /// order. An empty batch is still pushed; the search application treats
    /// it as a no-op commit.
    ///
    /// # Arguments
    ///
    /// * `mutations` - The staged mutations, in staging order
    /// * `app_name` - The search application identifier
    /// * `table_name` - The table within the search application
    ///
    /// # Returns
    ///
    /// * `Ok(CommitOutcome)` - The commit status reported by the application
    /// * `Err(IndexSyncError)` - If the push fails in transport or protocol
    async fn push_batch(
        &self,
        mutations: &[StagedMutation],
        app_name: &str,
        table_name: &str,
    ) -> Result<CommitOutcome, IndexSyncError>;
}
