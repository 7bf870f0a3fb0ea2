//! `db` crate — pure persistence layer.
//!
//! Provides a SQLite connection pool, typed row structs, repository functions
//! for the `musicians` and `bands` tables, the repository traits the HTTP
//! layer depends on, and the seed routine.  No request handling lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::DbError;
pub use models::{BandRow, BandWithMusicians, MusicianRow};
pub use pool::DbPool;
pub use store::{BandRepository, MusicianRepository, SqliteStore};
