//! # Object Indexer Repository
//!
//! This crate provides traits and implementations for the pipeline's external
//! collaborators: the object store that content is fetched from and the
//! search application that document batches are pushed to. It includes
//! definitions for errors, interfaces, request types, and concrete HTTP
//! client implementations.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod oss;
pub mod searchapp;
pub mod types;

pub use errors::{IndexSyncError, ObjectStoreError};
pub use interfaces::{DocumentSyncClient, ObjectStoreClient};
pub use oss::OssObjectStore;
pub use searchapp::SearchAppClient;
pub use types::{CommitOutcome, MutationKind, StagedMutation};
