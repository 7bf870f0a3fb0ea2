//! `catalog` crate — musician domain types and request validation.
//!
//! Nothing in here touches the network or the database; both the `api`
//! handlers and the `db` seed routine call into it before persisting.

pub mod error;
pub mod models;
pub mod validation;

pub use error::ValidationError;
pub use models::{MusicianDraft, MusicianInput};
pub use validation::{validate_musician, Violation, ViolationKind, MAX_FIELD_LEN, MIN_FIELD_LEN};
