//! Band read operations, plus the inserts the seed routine needs.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqliteExecutor;

use crate::{
    models::{BandMemberRow, BandRow, BandWithMusicians, MusicianRow},
    DbError, DbPool,
};

const BAND_COLUMNS: &str = "id, name, genre, created_at, updated_at";

const MEMBER_SELECT_SQL: &str = r#"
    SELECT bm.band_id, m.id, m.name, m.instrument, m.created_at, m.updated_at
    FROM band_musicians bm
    JOIN musicians m ON m.id = bm.musician_id
"#;

/// Insert a new band.
pub async fn create_band<'e, E>(executor: E, name: &str, genre: Option<&str>) -> Result<BandRow, DbError>
where
    E: SqliteExecutor<'e>,
{
    let now = Utc::now();

    let row = sqlx::query_as::<_, BandRow>(&format!(
        r#"
        INSERT INTO bands (name, genre, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?3)
        RETURNING {BAND_COLUMNS}
        "#
    ))
    .bind(name)
    .bind(genre)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Link a musician to a band.  Linking twice is a no-op.
pub async fn add_member<'e, E>(executor: E, band_id: i64, musician_id: i64) -> Result<(), DbError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT OR IGNORE INTO band_musicians (band_id, musician_id) VALUES (?1, ?2)")
        .bind(band_id)
        .bind(musician_id)
        .execute(executor)
        .await?;

    Ok(())
}

/// Return all bands in insertion order, each with its musicians attached.
pub async fn list_bands_with_musicians(pool: &DbPool) -> Result<Vec<BandWithMusicians>, DbError> {
    let bands = sqlx::query_as::<_, BandRow>(&format!(
        "SELECT {BAND_COLUMNS} FROM bands ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    let members = sqlx::query_as::<_, BandMemberRow>(&format!(
        "{MEMBER_SELECT_SQL} ORDER BY bm.band_id, m.id"
    ))
    .fetch_all(pool)
    .await?;

    let mut by_band: HashMap<i64, Vec<MusicianRow>> = HashMap::new();
    for member in members {
        by_band.entry(member.band_id).or_default().push(member.musician);
    }

    Ok(bands
        .into_iter()
        .map(|band| {
            let musicians = by_band.remove(&band.id).unwrap_or_default();
            BandWithMusicians { band, musicians }
        })
        .collect())
}

/// Fetch one band with its musicians.
///
/// Returns `DbError::NotFound` if no band has the given id.
pub async fn get_band_with_musicians(pool: &DbPool, id: i64) -> Result<BandWithMusicians, DbError> {
    let band = sqlx::query_as::<_, BandRow>(&format!(
        "SELECT {BAND_COLUMNS} FROM bands WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    let musicians = sqlx::query_as::<_, BandMemberRow>(&format!(
        "{MEMBER_SELECT_SQL} WHERE bm.band_id = ?1 ORDER BY m.id"
    ))
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|member| member.musician)
    .collect();

    Ok(BandWithMusicians { band, musicians })
}

/// Delete every band.  Memberships go with them.
pub async fn delete_all_bands<'e, E>(executor: E) -> Result<u64, DbError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM bands").execute(executor).await?;
    Ok(result.rows_affected())
}
