//! Seed routine and band read paths.

use db::pool::connect_in_memory;
use db::repository::{bands, musicians};
use db::seed::{seed, seed_bands, seed_musicians, SeedReport};
use db::{BandRepository, DbError, SqliteStore};

#[tokio::test]
async fn seed_writes_three_musicians_and_three_bands() {
    let pool = connect_in_memory().await.unwrap();

    let report = seed(&pool).await.unwrap();
    assert_eq!(
        report,
        SeedReport { musicians: 3, bands: 3, memberships: 4 }
    );

    let all = musicians::list_musicians(&pool).await.unwrap();
    assert_eq!(all.len(), seed_musicians().len());
    assert!(all.iter().any(|m| m.name == "Jimi Hendrix" && m.instrument == "Guitar"));
    assert_eq!(all[0].id, 1);
}

#[tokio::test]
async fn reseeding_resets_rows_and_ids() {
    let pool = connect_in_memory().await.unwrap();
    seed(&pool).await.unwrap();

    let extra = catalog::MusicianDraft { name: "Extra".into(), instrument: "Drums".into() };
    musicians::create_musician(&pool, &extra).await.unwrap();
    assert_eq!(musicians::list_musicians(&pool).await.unwrap().len(), 4);

    seed(&pool).await.unwrap();
    let all = musicians::list_musicians(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(bands::list_bands_with_musicians(&pool).await.unwrap().len(), 3);
}

#[tokio::test]
async fn bands_come_with_their_musicians() {
    let pool = connect_in_memory().await.unwrap();
    seed(&pool).await.unwrap();

    let listed = bands::list_bands_with_musicians(&pool).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|b| b.band.name.as_str()).collect();
    let expected: Vec<&str> = seed_bands().iter().map(|b| b.name).collect();
    assert_eq!(names, expected);

    let coldplay = listed.iter().find(|b| b.band.name == "Coldplay").unwrap();
    let members: Vec<&str> = coldplay.musicians.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, vec!["Drake", "Jimi Hendrix"]);
}

#[tokio::test]
async fn band_without_members_has_empty_list() {
    let pool = connect_in_memory().await.unwrap();
    let band = bands::create_band(&pool, "Solo Project", None).await.unwrap();

    let store = SqliteStore::new(pool);
    let loaded = store.get_with_musicians(band.id).await.unwrap();
    assert_eq!(loaded.band.genre, None);
    assert!(loaded.musicians.is_empty());
    assert!(matches!(store.get_with_musicians(band.id + 1).await, Err(DbError::NotFound)));
}

#[tokio::test]
async fn deleting_a_musician_drops_its_memberships() {
    let pool = connect_in_memory().await.unwrap();
    seed(&pool).await.unwrap();

    let drake = musicians::list_musicians(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.name == "Drake")
        .unwrap();
    musicians::delete_musician(&pool, drake.id).await.unwrap();

    let listed = bands::list_bands_with_musicians(&pool).await.unwrap();
    assert!(listed
        .iter()
        .all(|b| b.musicians.iter().all(|m| m.id != drake.id)));
}

#[tokio::test]
async fn failed_seed_leaves_previous_rows_in_place() {
    let pool = connect_in_memory().await.unwrap();
    seed(&pool).await.unwrap();

    let extra = catalog::MusicianDraft { name: "Extra".into(), instrument: "Drums".into() };
    musicians::create_musician(&pool, &extra).await.unwrap();

    // Linking members is the last step of a seed; make it fail.
    sqlx::query("DROP TABLE band_musicians").execute(&pool).await.unwrap();
    assert!(seed(&pool).await.is_err());

    let all = musicians::list_musicians(&pool).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.iter().any(|m| m.name == "Extra"));

    let band_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bands")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(band_count, 3);
}
