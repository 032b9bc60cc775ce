//! Processor module for the object indexer pipeline.
//!
//! Builds structured documents from change events.

mod document_builder;

pub use document_builder::DocumentBuilder;
