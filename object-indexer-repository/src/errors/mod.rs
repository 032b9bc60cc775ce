//! Error types for the object indexer repository.

mod index_sync_error;
mod object_store_error;

pub use index_sync_error::IndexSyncError;
pub use object_store_error::ObjectStoreError;
