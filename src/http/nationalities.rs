//! Route handlers for the nationality directory

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::directory::NationalityRecord;

/// `GET /nationalities` — full current list, refreshing the cache if stale
///
/// Never fails: fetch errors degrade to the fallback dataset inside the
/// cache manager.
pub async fn list(State(cache): State<AppState>) -> Json<Vec<NationalityRecord>> {
    Json(cache.get_all().await)
}

/// `GET /nationalities/{code}` — single record by country code
pub async fn by_code(
    State(cache): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<NationalityRecord>, ApiError> {
    let record = cache.get_by_code(&code).await?;
    Ok(Json(record))
}

/// `GET /nationalities/search/{query}` — substring search over the cached set
pub async fn search(
    State(cache): State<AppState>,
    Path(query): Path<String>,
) -> Json<Vec<NationalityRecord>> {
    Json(cache.search(&query).await)
}

/// `DELETE /nationalities/cache` — administrative cache reset
pub async fn clear_cache(State(cache): State<AppState>) -> Json<Value> {
    cache.clear();
    Json(json!({ "message": "Nationalities cache cleared successfully" }))
}
