//! Route handlers and the state they share.

pub mod bands;
pub mod musicians;

use std::sync::Arc;

use axum::Json;
use db::{BandRepository, DbPool, MusicianRepository, SqliteStore};
use serde_json::{json, Value};

use crate::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub musicians: Arc<dyn MusicianRepository>,
    pub bands: Arc<dyn BandRepository>,
}

impl AppState {
    pub fn new(musicians: Arc<dyn MusicianRepository>, bands: Arc<dyn BandRepository>) -> Self {
        Self { musicians, bands }
    }

    /// Back both repositories with one SQLite pool.
    pub fn from_pool(pool: DbPool) -> Self {
        let store = Arc::new(SqliteStore::new(pool));
        Self {
            musicians: store.clone(),
            bands: store,
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Parse a path id.  Anything that is not an integer cannot name a record,
/// so it is reported the same way as a missing one.
fn parse_id(raw: &str, resource: &'static str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(resource))
}
