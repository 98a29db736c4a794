//! Cache manager for the nationality directory
//!
//! One `DirectoryCache` is created per process and shared by handle across
//! request handlers. Fetched data is held in memory under a 24-hour TTL; when
//! the upstream directory fails, the fallback dataset is installed with an
//! almost-expired timestamp so the next request after ~60 seconds retries the
//! real source instead of waiting out a full TTL window.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::directory::{fallback_nationalities, DirectoryFetcher, NationalityRecord};

/// How long fetched data is considered fresh
const CACHE_TTL_HOURS: i64 = 24;

/// How long fallback data is served before the upstream is retried
const DEGRADED_RETRY_SECS: i64 = 60;

/// Errors surfaced by cache lookups
///
/// Fetch failures are absorbed by the fallback policy and never reach
/// callers; only lookup misses propagate.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record with the requested country code in the current dataset
    #[error("Nationality not found: {0}")]
    NotFound(String),
}

/// Cached dataset together with the time it was installed
#[derive(Debug, Clone)]
struct CacheState {
    records: Arc<Vec<NationalityRecord>>,
    fetched_at: DateTime<Utc>,
}

/// Serves nationality data from an in-memory, TTL-bounded cache
///
/// The state mutex is only held for reads and swaps of the snapshot, never
/// across the fetch await. Concurrent requests that observe a stale cache may
/// therefore each trigger a redundant fetch; fetch results are idempotent and
/// the last writer wins, so this is an accepted inefficiency rather than a
/// correctness problem.
pub struct DirectoryCache {
    fetcher: Arc<dyn DirectoryFetcher>,
    state: Mutex<Option<CacheState>>,
    ttl: Duration,
}

impl std::fmt::Debug for DirectoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryCache")
            .field("ttl", &self.ttl)
            .field("populated", &self.state.lock().unwrap().is_some())
            .finish()
    }
}

impl DirectoryCache {
    /// Creates an empty cache backed by the given fetcher, with the default
    /// 24-hour TTL
    pub fn new(fetcher: Arc<dyn DirectoryFetcher>) -> Self {
        Self::with_ttl(fetcher, Duration::hours(CACHE_TTL_HOURS))
    }

    /// Creates an empty cache with a custom TTL
    pub fn with_ttl(fetcher: Arc<dyn DirectoryFetcher>, ttl: Duration) -> Self {
        Self {
            fetcher,
            state: Mutex::new(None),
            ttl,
        }
    }

    /// Returns the full nationality list, refreshing the cache if stale
    ///
    /// Never fails: a fetch failure installs the fallback dataset instead.
    pub async fn get_all(&self) -> Vec<NationalityRecord> {
        if let Some(records) = self.fresh_snapshot() {
            return records.to_vec();
        }
        self.refresh().await.to_vec()
    }

    /// Returns the record with the given country code, case-insensitively
    ///
    /// Populates the cache first if it is empty; a populated-but-stale cache
    /// is served as-is (no TTL enforcement on this path).
    pub async fn get_by_code(&self, code: &str) -> Result<NationalityRecord, LookupError> {
        let code = code.to_uppercase();
        let records = self.ensure_populated().await;

        records
            .iter()
            .find(|record| record.code == code)
            .cloned()
            .ok_or(LookupError::NotFound(code))
    }

    /// Returns all records whose name, demonym, or code contains `query`
    /// as a case-insensitive substring
    ///
    /// Same emptiness-only population precondition as [`get_by_code`]; an
    /// empty result set is a valid answer, not an error.
    ///
    /// [`get_by_code`]: DirectoryCache::get_by_code
    pub async fn search(&self, query: &str) -> Vec<NationalityRecord> {
        let query = query.to_lowercase();
        let records = self.ensure_populated().await;

        records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&query)
                    || record.demonym.to_lowercase().contains(&query)
                    || record.code.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Administrative reset: drops the cached dataset unconditionally
    pub fn clear(&self) {
        *self.state.lock().unwrap() = None;
        debug!("nationality cache cleared");
    }

    /// Returns the cached records if present and within the TTL
    fn fresh_snapshot(&self) -> Option<Arc<Vec<NationalityRecord>>> {
        let guard = self.state.lock().unwrap();
        guard
            .as_ref()
            .filter(|state| Utc::now() - state.fetched_at < self.ttl)
            .map(|state| Arc::clone(&state.records))
    }

    /// Returns the cached records regardless of age, if present
    fn any_snapshot(&self) -> Option<Arc<Vec<NationalityRecord>>> {
        let guard = self.state.lock().unwrap();
        guard.as_ref().map(|state| Arc::clone(&state.records))
    }

    /// Returns the cached records, fetching or falling back only if the
    /// cache is empty
    async fn ensure_populated(&self) -> Arc<Vec<NationalityRecord>> {
        if let Some(records) = self.any_snapshot() {
            return records;
        }
        self.refresh().await
    }

    /// Replaces the cache from the upstream directory, degrading to the
    /// fallback dataset on failure
    async fn refresh(&self) -> Arc<Vec<NationalityRecord>> {
        match self.fetcher.fetch().await {
            Ok(records) => {
                debug!(count = records.len(), "nationality directory refreshed");
                self.install(records, Utc::now())
            }
            Err(err) => {
                warn!(error = %err, "directory fetch failed, serving fallback dataset");
                // Backdated so the fallback expires after the short retry
                // window instead of a full TTL.
                let fetched_at = Utc::now() - (self.ttl - Duration::seconds(DEGRADED_RETRY_SECS));
                self.install(fallback_nationalities(), fetched_at)
            }
        }
    }

    /// Installs a dataset wholesale and returns the stored snapshot
    fn install(
        &self,
        records: Vec<NationalityRecord>,
        fetched_at: DateTime<Utc>,
    ) -> Arc<Vec<NationalityRecord>> {
        let records = Arc::new(records);
        let mut guard = self.state.lock().unwrap();
        *guard = Some(CacheState {
            records: Arc::clone(&records),
            fetched_at,
        });
        records
    }

    /// Ages the cached timestamp by `age`, for deterministic TTL tests
    #[cfg(test)]
    fn backdate(&self, age: Duration) {
        let mut guard = self.state.lock().unwrap();
        if let Some(state) = guard.as_mut() {
            state.fetched_at -= age;
        }
    }
}
