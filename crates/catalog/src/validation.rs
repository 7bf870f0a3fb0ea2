//! Musician validation — run this before creating or updating a record.
//!
//! Rules enforced, per field (`name`, then `instrument`):
//! 1. Leading/trailing whitespace is trimmed; a missing field counts as empty.
//! 2. The trimmed value must not be empty (`required`).
//! 3. The trimmed value must be 2–20 characters long (`length`).
//!
//! The checks for one field stop at its first failure, but every field is
//! checked, so a single call reports all offending fields together.

use serde::{Deserialize, Serialize};

use crate::{MusicianDraft, MusicianInput, ValidationError};

/// Shortest accepted field value, in characters.
pub const MIN_FIELD_LEN: usize = 2;
/// Longest accepted field value, in characters.
pub const MAX_FIELD_LEN: usize = 20;

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Length,
}

/// A single field-level failure, tagged with the field's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field identifier, e.g. `"name"`.
    pub path: String,
    /// Human readable description of the failure.
    pub msg: String,
    /// The trimmed value that was checked.
    pub value: String,
    pub kind: ViolationKind,
    /// Where the field came from; always `"body"`.
    pub location: String,
}

impl Violation {
    fn new(path: &str, value: &str, kind: ViolationKind, msg: String) -> Self {
        Self {
            path: path.to_string(),
            msg,
            value: value.to_string(),
            kind,
            location: "body".to_string(),
        }
    }
}

type FieldCheck = fn(&str, &str) -> Option<Violation>;

/// Checks applied to every field, in order.
const FIELD_CHECKS: &[FieldCheck] = &[check_required, check_length];

/// Validate a candidate musician and return its normalised form.
///
/// # Errors
/// Returns a [`ValidationError`] holding one [`Violation`] per failing field.
pub fn validate_musician(input: &MusicianInput) -> Result<MusicianDraft, ValidationError> {
    let name = trimmed(input.name.as_deref());
    let instrument = trimmed(input.instrument.as_deref());

    let violations: Vec<Violation> = [("name", name), ("instrument", instrument)]
        .into_iter()
        .filter_map(|(path, value)| check_field(path, value))
        .collect();

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    Ok(MusicianDraft {
        name: name.to_string(),
        instrument: instrument.to_string(),
    })
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn check_field(path: &str, value: &str) -> Option<Violation> {
    FIELD_CHECKS.iter().find_map(|check| check(path, value))
}

fn check_required(path: &str, value: &str) -> Option<Violation> {
    if value.is_empty() {
        return Some(Violation::new(
            path,
            value,
            ViolationKind::Required,
            format!("{path} is required"),
        ));
    }
    None
}

fn check_length(path: &str, value: &str) -> Option<Violation> {
    let len = value.chars().count();
    if !(MIN_FIELD_LEN..=MAX_FIELD_LEN).contains(&len) {
        return Some(Violation::new(
            path,
            value,
            ViolationKind::Length,
            format!("{path} must be between {MIN_FIELD_LEN} and {MAX_FIELD_LEN} characters"),
        ));
    }
    None
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
