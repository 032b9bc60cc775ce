//! Configuration module for the object indexer.

mod dependencies;

pub use dependencies::Dependencies;
