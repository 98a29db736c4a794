//! In-memory nationality cache
//!
//! Provides the `DirectoryCache` that serves nationality data with
//! at-most-one-fetch-per-TTL-window semantics and graceful degradation to a
//! built-in fallback dataset.

pub mod manager;

pub use manager::{DirectoryCache, LookupError};
