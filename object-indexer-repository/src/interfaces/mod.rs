//! Collaborator interface traits.

mod document_sync_client;
mod object_store_client;

pub use document_sync_client::DocumentSyncClient;
pub use object_store_client::ObjectStoreClient;
