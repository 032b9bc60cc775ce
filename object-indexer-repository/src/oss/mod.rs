//! Object store REST client implementation.

mod client;

pub use client::OssObjectStore;
