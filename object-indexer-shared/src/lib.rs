//! # Object Indexer Shared
//!
//! Shared types and data structures for the object storage search indexer:
//! change events decoded from storage notifications, the classification
//! tables for their event names, and the structured document record that is
//! synchronized into the search index.

pub mod document;
pub mod events;

pub use document::{DocumentId, StructuredDocument};
pub use events::{ChangeEvent, EventKind};
