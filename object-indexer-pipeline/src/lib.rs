//! # Object Indexer Pipeline
//!
//! This crate provides the pipeline components for translating object
//! storage change notifications into structured documents and committing
//! them to the search application as a single batch.
//!
//! ## Architecture
//!
//! The pipeline follows the Decoder-Builder-Synchronizer pattern:
//!
//! 1. **Decoder**: Parses the notification payload into change events
//! 2. **Fetcher**: Retrieves object content for non-delete events
//! 3. **Builder**: Assembles structured documents from events
//! 4. **Synchronizer**: Stages mutations and commits the whole batch
//! 5. **Orchestrator**: Coordinates the pipeline flow per invocation

pub mod decoder;
pub mod errors;
pub mod fetcher;
pub mod orchestrator;
pub mod processor;
pub mod synchronizer;

pub use errors::PipelineError;
pub use orchestrator::{BatchOrchestrator, BatchSummary, PipelineStage, RunOutcome};
