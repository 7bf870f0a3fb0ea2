//! Repository traits the HTTP layer is written against, and their SQLite
//! implementation.
//!
//! Handlers only see `dyn MusicianRepository` / `dyn BandRepository`, so they
//! never name the pool or the SQL dialect.

use async_trait::async_trait;
use catalog::MusicianDraft;

use crate::{
    models::{BandWithMusicians, MusicianRow},
    repository::{bands, musicians},
    DbError, DbPool,
};

/// Narrow CRUD interface over stored musicians.
///
/// `get`, `update` and `delete` report a missing id as [`DbError::NotFound`].
#[async_trait]
pub trait MusicianRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MusicianRow>, DbError>;
    async fn get(&self, id: i64) -> Result<MusicianRow, DbError>;
    async fn create(&self, draft: &MusicianDraft) -> Result<MusicianRow, DbError>;
    async fn update(&self, id: i64, draft: &MusicianDraft) -> Result<MusicianRow, DbError>;
    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// Read-only interface over stored bands.
#[async_trait]
pub trait BandRepository: Send + Sync {
    async fn list_with_musicians(&self) -> Result<Vec<BandWithMusicians>, DbError>;
    async fn get_with_musicians(&self, id: i64) -> Result<BandWithMusicians, DbError>;
}

/// Both repositories backed by one SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MusicianRepository for SqliteStore {
    async fn list(&self) -> Result<Vec<MusicianRow>, DbError> {
        musicians::list_musicians(&self.pool).await
    }

    async fn get(&self, id: i64) -> Result<MusicianRow, DbError> {
        musicians::get_musician(&self.pool, id).await
    }

    async fn create(&self, draft: &MusicianDraft) -> Result<MusicianRow, DbError> {
        musicians::create_musician(&self.pool, draft).await
    }

    async fn update(&self, id: i64, draft: &MusicianDraft) -> Result<MusicianRow, DbError> {
        musicians::update_musician(&self.pool, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        musicians::delete_musician(&self.pool, id).await
    }
}

#[async_trait]
impl BandRepository for SqliteStore {
    async fn list_with_musicians(&self) -> Result<Vec<BandWithMusicians>, DbError> {
        bands::list_bands_with_musicians(&self.pool).await
    }

    async fn get_with_musicians(&self, id: i64) -> Result<BandWithMusicians, DbError> {
        bands::get_band_with_musicians(&self.pool, id).await
    }
}
