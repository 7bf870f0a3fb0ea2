//! Seed data and the routine that resets the database to it.

use catalog::{validate_musician, MusicianInput};
use sqlx::{Sqlite, Transaction};
use tracing::info;

use crate::{
    repository::{bands, musicians},
    DbError, DbPool,
};

/// A band to seed, with the names of the seed musicians who play in it.
#[derive(Debug, Clone)]
pub struct SeedBand {
    pub name: &'static str,
    pub genre: &'static str,
    pub members: &'static [&'static str],
}

/// Row counts written by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub musicians: usize,
    pub bands: usize,
    pub memberships: usize,
}

/// The three seed musicians, in insertion order.
pub fn seed_musicians() -> Vec<MusicianInput> {
    vec![
        MusicianInput::new("Mick Jagger", "Voice"),
        MusicianInput::new("Drake", "Voice"),
        MusicianInput::new("Jimi Hendrix", "Guitar"),
    ]
}

/// The three seed bands, in insertion order.
pub fn seed_bands() -> Vec<SeedBand> {
    vec![
        SeedBand { name: "The Beatles", genre: "Rock", members: &["Mick Jagger"] },
        SeedBand { name: "Black Pink", genre: "Pop", members: &["Drake"] },
        SeedBand { name: "Coldplay", genre: "Rock", members: &["Jimi Hendrix", "Drake"] },
    ]
}

/// Wipe every table and write the seed data.
///
/// Runs in one transaction: on any failure the tables keep their previous
/// contents.  Ids restart at 1, so the first seed musician is always
/// `/musicians/1`.
pub async fn seed(pool: &DbPool) -> Result<SeedReport, DbError> {
    let drafts = seed_musicians()
        .iter()
        .map(validate_musician)
        .collect::<Result<Vec<_>, _>>()?;

    let mut tx = pool.begin().await?;
    reset(&mut tx).await?;

    let mut created = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        created.push(musicians::create_musician(&mut *tx, draft).await?);
    }

    let mut report = SeedReport { musicians: created.len(), bands: 0, memberships: 0 };
    for seed_band in seed_bands() {
        let band = bands::create_band(&mut *tx, seed_band.name, Some(seed_band.genre)).await?;
        report.bands += 1;

        for member in seed_band.members {
            if let Some(musician) = created.iter().find(|m| m.name == *member) {
                bands::add_member(&mut *tx, band.id, musician.id).await?;
                report.memberships += 1;
            }
        }
    }

    tx.commit().await?;

    info!(
        musicians = report.musicians,
        bands = report.bands,
        memberships = report.memberships,
        "Seeded database"
    );
    Ok(report)
}

async fn reset(tx: &mut Transaction<'_, Sqlite>) -> Result<(), DbError> {
    bands::delete_all_bands(&mut **tx).await?;
    musicians::delete_all_musicians(&mut **tx).await?;
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('musicians', 'bands')")
        .execute(&mut **tx)
        .await?;
    Ok(())
}
