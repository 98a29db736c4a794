//! HTTP surface for the nationality directory
//!
//! Exposes the cache manager over four routes:
//! `GET /nationalities`, `GET /nationalities/{code}`,
//! `GET /nationalities/search/{query}`, and `DELETE /nationalities/cache`.

pub mod error;
mod nationalities;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::cache::DirectoryCache;

/// Shared state handed to every handler
pub type AppState = Arc<DirectoryCache>;

/// Builds the service router over a shared cache handle
pub fn router(cache: AppState) -> Router {
    Router::new()
        .route("/nationalities", get(nationalities::list))
        .route("/nationalities/search/{query}", get(nationalities::search))
        .route("/nationalities/cache", delete(nationalities::clear_cache))
        .route("/nationalities/{code}", get(nationalities::by_code))
        .layer(TraceLayer::new_for_http())
        .with_state(cache)
}
