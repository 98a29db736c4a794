//! Nationality Directory Service Library
//!
//! Exposes the cache, directory, HTTP, and client modules for use by the
//! server binary and the integration tests.

pub mod cache;
pub mod cli;
pub mod client;
pub mod directory;
pub mod http;
