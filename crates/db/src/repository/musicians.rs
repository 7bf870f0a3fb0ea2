//! Musician CRUD operations.

use catalog::MusicianDraft;
use chrono::Utc;
use sqlx::SqliteExecutor;
use tracing::debug;

use crate::{models::MusicianRow, DbError, DbPool};

const MUSICIAN_COLUMNS: &str = "id, name, instrument, created_at, updated_at";

/// Insert a new musician and return it with its generated id.
///
/// `draft` must come out of `catalog::validate_musician`.  Accepts the pool
/// or an open transaction.
pub async fn create_musician<'e, E>(executor: E, draft: &MusicianDraft) -> Result<MusicianRow, DbError>
where
    E: SqliteExecutor<'e>,
{
    let now = Utc::now();

    let row = sqlx::query_as::<_, MusicianRow>(&format!(
        r#"
        INSERT INTO musicians (name, instrument, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?3)
        RETURNING {MUSICIAN_COLUMNS}
        "#
    ))
    .bind(&draft.name)
    .bind(&draft.instrument)
    .bind(now)
    .fetch_one(executor)
    .await?;

    debug!(id = row.id, "created musician");
    Ok(row)
}

/// Fetch a single musician by its primary key.
pub async fn get_musician(pool: &DbPool, id: i64) -> Result<MusicianRow, DbError> {
    let row = sqlx::query_as::<_, MusicianRow>(&format!(
        "SELECT {MUSICIAN_COLUMNS} FROM musicians WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all musicians in insertion order.
pub async fn list_musicians(pool: &DbPool) -> Result<Vec<MusicianRow>, DbError> {
    let rows = sqlx::query_as::<_, MusicianRow>(&format!(
        "SELECT {MUSICIAN_COLUMNS} FROM musicians ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Replace `name` and `instrument` of an existing musician.
///
/// Returns `DbError::NotFound` if no row has the given id.
pub async fn update_musician(
    pool: &DbPool,
    id: i64,
    draft: &MusicianDraft,
) -> Result<MusicianRow, DbError> {
    let row = sqlx::query_as::<_, MusicianRow>(&format!(
        r#"
        UPDATE musicians
        SET name = ?1, instrument = ?2, updated_at = ?3
        WHERE id = ?4
        RETURNING {MUSICIAN_COLUMNS}
        "#
    ))
    .bind(&draft.name)
    .bind(&draft.instrument)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    debug!(id, "updated musician");
    Ok(row)
}

/// Permanently delete a musician by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_musician(pool: &DbPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM musicians WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    debug!(id, "deleted musician");
    Ok(())
}

/// Delete every musician.  Band memberships go with them.
pub async fn delete_all_musicians<'e, E>(executor: E) -> Result<u64, DbError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM musicians").execute(executor).await?;
    Ok(result.rows_affected())
}
