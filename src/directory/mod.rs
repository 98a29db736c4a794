//! Nationality directory data model and sources
//!
//! This module contains the `NationalityRecord` type used throughout the
//! service, the remote directory fetcher, the built-in fallback dataset, and
//! the demonym collation used to order results.

pub mod collate;
pub mod fallback;
pub mod fetcher;

pub use fallback::fallback_nationalities;
pub use fetcher::{DirectoryFetcher, FetchError, RestCountriesClient};

use serde::{Deserialize, Serialize};

/// A single nationality entry in the directory
///
/// Immutable once constructed. The `code` is an upper-case ISO-3166 alpha-2
/// country code and acts as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityRecord {
    /// ISO-3166 alpha-2 country code, upper-case (e.g. "MA")
    pub code: String,
    /// Localized country display name (e.g. "Maroc")
    pub name: String,
    /// Localized demonym (e.g. "Marocaine")
    pub demonym: String,
}

impl NationalityRecord {
    /// Convenience constructor, mainly for the fallback dataset and tests
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        demonym: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            demonym: demonym.into(),
        }
    }
}
