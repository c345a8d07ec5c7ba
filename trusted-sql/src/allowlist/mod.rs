//! Allowlist validation of runtime values.
//!
//! An [`Allowlist`] is the only way to turn a runtime `&str` (a column name from a
//! query string, a table name from a request body) into a [`ValidatedString`].
//! Matching is exact and case-sensitive: no trimming, no case folding, no
//! Unicode normalization.
//!
//! # Example
//!
//! ```
//! use trusted_sql::{allowlist, wrap};
//!
//! let columns = allowlist!("first_name", "middle_name", "last_name");
//!
//! let column = columns.validate("middle_name").unwrap();
//! let query = wrap!("SELECT COUNT(*) FROM users WHERE ") + column + wrap!(" = ?;");
//! assert_eq!(query.as_str(), "SELECT COUNT(*) FROM users WHERE middle_name = ?;");
//!
//! assert!(columns.validate("true; DROP TABLE users; --").is_err());
//! assert!(columns.validate("Middle_Name").is_err());
//! ```
//!
//! Items themselves must be trusted, so an allowlist cannot be built from
//! runtime strings, and it cannot be empty:
//!
//! ```compile_fail
//! let from_config = String::from("users");
//! let _ = trusted_sql::allowlist!(from_config);
//! ```
//!
//! ```compile_fail
//! let _ = trusted_sql::allowlist!();
//! ```

mod error;

use std::collections::BTreeSet;

pub use error::ValidationError;

use crate::ValidatedString;

/// An immutable set of permitted values.
///
/// Built once with [`allowlist!`](crate::allowlist) or [`Allowlist::new`], then
/// shared freely: validation only reads, so an `Allowlist` can sit in a
/// `static`/`LazyLock` or be used from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    items: BTreeSet<ValidatedString>,
}

impl Allowlist {
    /// Create an allowlist from at least one trusted item.
    ///
    /// Duplicates collapse into one entry.
    ///
    /// ```
    /// use trusted_sql::{Allowlist, wrap};
    ///
    /// let tables = Allowlist::new(wrap!("users"), [wrap!("customers"), wrap!("users")]);
    /// assert_eq!(tables.len(), 2);
    /// ```
    #[must_use]
    pub fn new<I>(first: ValidatedString, rest: I) -> Self
    where
        I: IntoIterator<Item = ValidatedString>,
    {
        let mut items = BTreeSet::new();
        items.insert(first);
        items.extend(rest);
        Self { items }
    }

    /// Validate a runtime value against the allowlist.
    ///
    /// Returns the matching item on success. The returned string has exactly the
    /// content of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying the value and the allowlist contents
    /// if `value` is not an item.
    pub fn validate(&self, value: &str) -> Result<ValidatedString, ValidationError> {
        if let Some(item) = self.items.get(value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(value, "value accepted by allowlist");
            return Ok(item.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            value = ?value,
            allowed = self.items.len(),
            "value rejected by allowlist"
        );

        Err(ValidationError::new(
            value.to_string(),
            self.iter().map(str::to_string).collect(),
        ))
    }

    /// Validate a value that is already known to be in the allowlist.
    ///
    /// Use this only where a miss would be a bug in the calling code, never for
    /// untrusted input; use [`validate`](Self::validate) for that.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not an item.
    ///
    /// ```should_panic
    /// use trusted_sql::allowlist;
    ///
    /// allowlist!("asc", "desc").must_validate("ASC; --"); // Panics!
    /// ```
    #[must_use]
    pub fn must_validate(&self, value: &str) -> ValidatedString {
        match self.validate(value) {
            Ok(item) => item,
            Err(err) => panic!("must_validate called with a value outside the allowlist: {err}"),
        }
    }

    /// Whether `value` is an item.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.items.contains(value)
    }

    /// Number of distinct items (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: an allowlist has at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ValidatedString::as_str)
    }
}
