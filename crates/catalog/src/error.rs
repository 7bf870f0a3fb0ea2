//! Catalog-level error types.

use thiserror::Error;

use crate::validation::Violation;

/// A candidate musician failed one or more field checks.
///
/// Carries every violation found, never just the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation: {}", .violations.len(), summary(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Field identifiers that failed, in check order.
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
