//! Core domain models for musicians.
//!
//! `MusicianInput` is what arrives on the wire: both fields may be missing.
//! `MusicianDraft` only exists after validation and always holds trimmed,
//! in-bounds values, so the persistence layer can take it at face value.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MusicianInput
// ---------------------------------------------------------------------------

/// Unvalidated `{name, instrument}` body of a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicianInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instrument: Option<String>,
}

impl MusicianInput {
    pub fn new(name: impl Into<String>, instrument: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            instrument: Some(instrument.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MusicianDraft
// ---------------------------------------------------------------------------

/// A musician that passed validation and is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicianDraft {
    pub name: String,
    pub instrument: String,
}
