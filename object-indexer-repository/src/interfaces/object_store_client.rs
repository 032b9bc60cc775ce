//! Object store client trait definition.
//!
//! This module defines the abstract interface for fetching object content,
//! allowing for different backend implementations (REST client, mock, etc.).

use async_trait::async_trait;

use crate::errors::ObjectStoreError;

/// Abstract interface for retrieving object content from the object store.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Fetch the full text content of an object.
    ///
    /// # Arguments
    ///
    /// * `container_name` - The bucket holding the object
    /// * `object_key` - The object's key within the bucket
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The object's content decoded as UTF-8 text
    /// * `Err(ObjectStoreError)` - If the object cannot be retrieved or read
    async fn get_object(
        &self,
        container_name: &str,
        object_key: &str,
    ) -> Result<String, ObjectStoreError>;
}
