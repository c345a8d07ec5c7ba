//! Allowlist validation error.

use thiserror::Error;

/// A runtime value was not one of the allowlist's items.
///
/// Carries the rejected value and the allowlist contents (sorted) for diagnostics.
/// The rejected value is printed with `Debug` escaping, so control characters
/// and quotes in hostile input stay visible in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("value {value:?} is not in allowlist, allowed values: {listed}", listed = .allowed.join(", "))]
#[non_exhaustive]
pub struct ValidationError {
    value: String,
    allowed: Vec<String>,
}

impl ValidationError {
    pub(crate) const fn new(value: String, allowed: Vec<String>) -> Self {
        Self { value, allowed }
    }

    /// The rejected value, exactly as it was passed in.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The allowlist items, in sorted order.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}
