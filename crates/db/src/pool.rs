//! SQLite connection pool and schema bootstrap.
//!
//! Lifecycle: [`create_pool`] + [`run_migrations`] at start-up,
//! [`close_pool`] at shutdown.  Tests use [`connect_in_memory`], which does
//! both set-up steps at once.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::DbError;

/// Type alias for the shared SQLite pool used across the whole application.
pub type DbPool = SqlitePool;

/// Create a new connection pool from the given `database_url`.
///
/// The database file is created if it does not exist yet.  An in-memory URL
/// (`sqlite::memory:` or `mode=memory`) is limited to a single connection,
/// since every SQLite connection to it would otherwise see its own empty
/// database.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    let in_memory = is_in_memory(database_url);
    let max_connections = if in_memory && max_connections > 1 {
        warn!("In-memory database requested; limiting pool to a single connection");
        1
    } else {
        max_connections
    };

    info!("Connecting to database (max_connections={})", max_connections);
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
    if in_memory {
        pool_options = pool_options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a migrated, single-connection in-memory database.
pub async fn connect_in_memory() -> Result<DbPool, DbError> {
    let pool = create_pool("sqlite::memory:", 1).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run embedded SQLx migrations located in `./migrations` (relative to the
/// workspace root at build time).
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Close every connection in the pool, waiting for checked-out ones.
pub async fn close_pool(pool: DbPool) {
    info!("Closing database pool");
    pool.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_urls_are_recognised() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:scratch?mode=memory"));
        assert!(is_in_memory("sqlite://scratch.db?mode=memory"));
        assert!(!is_in_memory("sqlite://musicians.db"));
        assert!(!is_in_memory("sqlite://memory.db?mode=rwc"));
    }

    #[tokio::test]
    async fn mode_memory_url_gets_a_single_connection() {
        let pool = create_pool("sqlite://pool_test.db?mode=memory", 5).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 1);

        run_migrations(&pool).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM musicians")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        close_pool(pool).await;
    }
}
