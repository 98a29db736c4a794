//! Thin typed client for the nationality directory HTTP API
//!
//! Mirrors the four routes exposed by the service. Useful for other services
//! and for end-to-end tests against a running instance.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::directory::NationalityRecord;

/// Errors returned by the typed client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or a body could not be decoded
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The requested country code is unknown to the service
    #[error("Nationality not found: {0}")]
    NotFound(String),

    /// The service answered with an unexpected status
    #[error("Unexpected status {0} from nationality service")]
    UnexpectedStatus(StatusCode),
}

/// Client for a running nationality directory service
#[derive(Debug, Clone)]
pub struct NationalitiesApi {
    http_client: Client,
    base_url: String,
}

impl NationalitiesApi {
    /// Creates a client against the given base URL (e.g. `http://host:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Builds the full URL for a path under the service root
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetches the full nationality list
    pub async fn get_all(&self) -> Result<Vec<NationalityRecord>, ClientError> {
        let response = self
            .http_client
            .get(self.url("nationalities"))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetches a single record by country code
    pub async fn get_by_code(&self, code: &str) -> Result<NationalityRecord, ClientError> {
        let response = self
            .http_client
            .get(self.url(&format!("nationalities/{code}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(code.to_uppercase())),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    /// Searches records by name, demonym, or code substring
    pub async fn search(&self, query: &str) -> Result<Vec<NationalityRecord>, ClientError> {
        let response = self
            .http_client
            .get(self.url(&format!("nationalities/search/{query}")))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Clears the service-side cache
    pub async fn clear_cache(&self) -> Result<(), ClientError> {
        let response = self
            .http_client
            .delete(self.url("nationalities/cache"))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = NationalitiesApi::new("http://localhost:3000/");
        assert_eq!(api.url("nationalities"), "http://localhost:3000/nationalities");
    }

    #[test]
    fn test_url_building_for_lookup_and_search() {
        let api = NationalitiesApi::new("http://localhost:3000");
        assert_eq!(
            api.url(&format!("nationalities/{}", "MA")),
            "http://localhost:3000/nationalities/MA"
        );
        assert_eq!(
            api.url(&format!("nationalities/search/{}", "maroc")),
            "http://localhost:3000/nationalities/search/maroc"
        );
    }

    #[test]
    fn test_not_found_error_carries_upper_cased_code() {
        let err = ClientError::NotFound("ZZ".to_string());
        assert!(err.to_string().contains("ZZ"));
    }
}
