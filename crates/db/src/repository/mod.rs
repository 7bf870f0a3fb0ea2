//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! The writes the seed routine batches take any `SqliteExecutor`, so they
//! also run inside a transaction.
//! No business logic — pure SQL.

pub mod bands;
pub mod musicians;
