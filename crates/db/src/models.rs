//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models, serialised as-is in API responses.
//! Validation rules live in the `catalog` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// musicians
// ---------------------------------------------------------------------------

/// A persisted musician row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MusicianRow {
    pub id: i64,
    pub name: String,
    pub instrument: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// bands
// ---------------------------------------------------------------------------

/// A persisted band row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BandRow {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A band together with its members, as returned by the `/bands` routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandWithMusicians {
    #[serde(flatten)]
    pub band: BandRow,
    pub musicians: Vec<MusicianRow>,
}

// ---------------------------------------------------------------------------
// band_musicians
// ---------------------------------------------------------------------------

/// One musician joined through `band_musicians`, tagged with its band.
#[derive(Debug, Clone, FromRow)]
pub struct BandMemberRow {
    pub band_id: i64,
    #[sqlx(flatten)]
    pub musician: MusicianRow,
}
