//! REST Countries directory fetcher
//!
//! Retrieves the authoritative nationality list from the REST Countries API
//! and maps each country entry into a `NationalityRecord`, preferring the
//! French-localized name and demonym with English as a secondary fallback.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{collate, NationalityRecord};

/// Endpoint returning all countries, restricted to the fields we map
const REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name,demonyms,cca2";

/// Upper bound on a single directory request
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder display name when no name field resolves
const UNKNOWN_NAME: &str = "Unknown";

/// Errors that can occur when fetching the nationality directory
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, or error status)
    #[error("Directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Failed to parse directory response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of nationality records for the cache manager
///
/// Abstracting the fetch lets tests substitute counting or failing sources
/// without touching the network.
#[async_trait]
pub trait DirectoryFetcher: Send + Sync {
    /// Fetches the full nationality list, sorted ascending by demonym
    async fn fetch(&self) -> Result<Vec<NationalityRecord>, FetchError>;
}

/// Client for the REST Countries directory API
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    /// HTTP client with the fetch timeout applied
    http_client: Client,
    /// Full request URL (overridable for testing and dev)
    url: String,
}

impl RestCountriesClient {
    /// Creates a client against the public REST Countries endpoint
    pub fn new() -> Self {
        Self::with_url(REST_COUNTRIES_URL.to_string())
    }

    /// Creates a client against a custom endpoint URL
    pub fn with_url(url: String) -> Self {
        let http_client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http_client, url }
    }

    /// Maps the raw country entries into filtered, demonym-sorted records
    fn map_countries(countries: Vec<CountryEntry>) -> Vec<NationalityRecord> {
        let mut records: Vec<NationalityRecord> = countries
            .into_iter()
            .filter_map(to_record)
            .filter(|record| record.demonym != UNKNOWN_NAME && record.demonym != record.name)
            .collect();

        records.sort_by(|a, b| collate::compare(&a.demonym, &b.demonym));
        records
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryFetcher for RestCountriesClient {
    async fn fetch(&self) -> Result<Vec<NationalityRecord>, FetchError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let countries: Vec<CountryEntry> = serde_json::from_str(&text)?;

        Ok(Self::map_countries(countries))
    }
}

/// Converts one country entry into a record
///
/// Entries without a two-letter code are dropped: the code is the lookup key
/// and a record cannot exist without it.
fn to_record(entry: CountryEntry) -> Option<NationalityRecord> {
    let code = entry.cca2?.to_uppercase();

    let name = entry
        .name
        .as_ref()
        .and_then(CountryName::french_native_common)
        .or_else(|| entry.name.as_ref().and_then(|n| n.common.clone()))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let demonym = entry
        .demonyms
        .as_ref()
        .and_then(|d| d.fra.as_ref())
        .and_then(|forms| forms.m.clone())
        .or_else(|| {
            entry
                .demonyms
                .as_ref()
                .and_then(|d| d.eng.as_ref())
                .and_then(|forms| forms.m.clone())
        })
        .unwrap_or_else(|| name.clone());

    Some(NationalityRecord {
        code,
        name,
        demonym,
    })
}

/// One country object from the REST Countries response
///
/// Every sub-field is optional; the upstream API omits fields freely.
#[derive(Debug, Deserialize)]
struct CountryEntry {
    #[serde(default)]
    name: Option<CountryName>,
    #[serde(default)]
    demonyms: Option<Demonyms>,
    #[serde(default)]
    cca2: Option<String>,
}

/// Country name block with per-language native names
#[derive(Debug, Deserialize)]
struct CountryName {
    #[serde(default)]
    common: Option<String>,
    #[serde(default, rename = "nativeName")]
    native_name: Option<HashMap<String, NativeName>>,
}

impl CountryName {
    /// The French native common name, if present
    fn french_native_common(&self) -> Option<String> {
        self.native_name
            .as_ref()
            .and_then(|langs| langs.get("fra"))
            .and_then(|native| native.common.clone())
    }
}

/// A native-language name variant
#[derive(Debug, Deserialize)]
struct NativeName {
    #[serde(default)]
    common: Option<String>,
}

/// Demonyms keyed by language
#[derive(Debug, Deserialize)]
struct Demonyms {
    #[serde(default)]
    fra: Option<DemonymForms>,
    #[serde(default)]
    eng: Option<DemonymForms>,
}

/// Masculine/feminine demonym forms for one language
#[derive(Debug, Deserialize)]
struct DemonymForms {
    #[serde(default)]
    m: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    f: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample REST Countries response covering the mapping preferences
    const VALID_RESPONSE: &str = r#"[
        {
            "name": {
                "common": "Morocco",
                "nativeName": {
                    "ara": { "common": "المغرب" },
                    "fra": { "common": "Maroc" }
                }
            },
            "demonyms": {
                "eng": { "f": "Moroccan", "m": "Moroccan" },
                "fra": { "f": "Marocaine", "m": "Marocain" }
            },
            "cca2": "MA"
        },
        {
            "name": { "common": "Canada" },
            "demonyms": {
                "eng": { "f": "Canadian", "m": "Canadian" }
            },
            "cca2": "ca"
        },
        {
            "name": { "common": "Atlantis" },
            "cca2": "AT"
        },
        {
            "name": { "common": "Adrift" },
            "demonyms": {}
        }
    ]"#;

    fn parse_sample() -> Vec<CountryEntry> {
        serde_json::from_str(VALID_RESPONSE).expect("Failed to parse sample response")
    }

    #[test]
    fn test_prefers_french_native_name_and_demonym() {
        let records = RestCountriesClient::map_countries(parse_sample());
        let morocco = records
            .iter()
            .find(|r| r.code == "MA")
            .expect("Morocco should survive mapping");

        assert_eq!(morocco.name, "Maroc");
        assert_eq!(morocco.demonym, "Marocain");
    }

    #[test]
    fn test_falls_back_to_english_demonym_and_uppercases_code() {
        let records = RestCountriesClient::map_countries(parse_sample());
        let canada = records
            .iter()
            .find(|r| r.code == "CA")
            .expect("Canada should survive mapping");

        assert_eq!(canada.name, "Canada");
        assert_eq!(canada.demonym, "Canadian");
    }

    #[test]
    fn test_drops_entries_without_resolvable_demonym() {
        // "Atlantis" has no demonyms at all, so its demonym falls back to its
        // own name and the record is filtered out.
        let records = RestCountriesClient::map_countries(parse_sample());
        assert!(records.iter().all(|r| r.code != "AT"));
    }

    #[test]
    fn test_drops_entries_without_country_code() {
        let records = RestCountriesClient::map_countries(parse_sample());
        assert!(records.iter().all(|r| !r.code.is_empty()));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_no_mapped_record_has_unknown_or_self_demonym() {
        let entries: Vec<CountryEntry> = serde_json::from_str(
            r#"[
                { "cca2": "XX" },
                {
                    "name": { "common": "Samename" },
                    "demonyms": { "eng": { "m": "Samename" } },
                    "cca2": "SN"
                }
            ]"#,
        )
        .expect("Failed to parse");

        // "XX" has no name (falls back to "Unknown") and no demonym (falls
        // back to the name); "SN" has a demonym equal to its name.
        let records = RestCountriesClient::map_countries(entries);
        assert!(records.is_empty());
    }

    #[test]
    fn test_records_are_sorted_by_demonym() {
        let entries: Vec<CountryEntry> = serde_json::from_str(
            r#"[
                {
                    "name": { "common": "Tunisie" },
                    "demonyms": { "fra": { "m": "Tunisienne" } },
                    "cca2": "TN"
                },
                {
                    "name": { "common": "Égypte" },
                    "demonyms": { "fra": { "m": "Égyptienne" } },
                    "cca2": "EG"
                },
                {
                    "name": { "common": "Espagne" },
                    "demonyms": { "fra": { "m": "Espagnole" } },
                    "cca2": "ES"
                }
            ]"#,
        )
        .expect("Failed to parse");

        let records = RestCountriesClient::map_countries(entries);
        let demonyms: Vec<&str> = records.iter().map(|r| r.demonym.as_str()).collect();

        // Accent-aware order, not byte order (which would sort "Égyptienne" last)
        assert_eq!(demonyms, ["Égyptienne", "Espagnole", "Tunisienne"]);
    }

    #[test]
    fn test_parse_malformed_json_is_an_error() {
        let malformed = "{ not a country list }";
        let result: Result<Vec<CountryEntry>, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn test_tolerates_missing_sub_fields() {
        // Entries may omit any of name / demonyms / cca2
        let entries: Vec<CountryEntry> =
            serde_json::from_str(r#"[ {}, { "cca2": "FR" } ]"#).expect("Failed to parse");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_default_client_targets_rest_countries() {
        let client = RestCountriesClient::default();
        assert!(client.url.contains("restcountries.com"));
        assert!(client.url.contains("fields=name,demonyms,cca2"));
    }
}
