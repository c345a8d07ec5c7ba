// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // SQL keywords in docs are not code items
#![allow(clippy::return_self_not_must_use)] // Builder::append returns &mut Self for chaining

//! # trusted-sql - Handcrafted SQL Without Injection
//!
//! Prepared statements protect data values, but not the parts of a statement
//! that cannot be parameterized: table names, column names, sort directions,
//! and the shape of a dynamically assembled `WHERE` clause. This crate protects
//! those parts at the type level.
//!
//! Every fragment that ends up in the final SQL text is a [`ValidatedString`],
//! and a `ValidatedString` can only come from:
//!
//! - [`wrap!`]: string literals written in source code, checked at compile time
//! - [`Allowlist::validate`]: runtime values that exactly match an allowlist item
//! - [`ValidatedString::from_integer`]: decimal integers
//! - composing other `ValidatedString`s with [`concat`], [`join`], [`replace`],
//!   [`replace_all`], `+`, or a [`Builder`]
//!
//! Data values still go through your driver's bind parameters.
//!
//! ## Quick Start
//!
//! ```
//! use trusted_sql::{allowlist, wrap};
//!
//! fn count_by(column: &str) -> Result<String, trusted_sql::ValidationError> {
//!     let column = allowlist!("first_name", "middle_name", "last_name").validate(column)?;
//!
//!     let query = wrap!("SELECT COUNT(*) FROM users WHERE ") + column + wrap!(" = ?;");
//!
//!     // Trust boundary: hand the text and the bind parameters to the driver
//!     Ok(query.into_string())
//! }
//!
//! assert_eq!(
//!     count_by("middle_name").unwrap(),
//!     "SELECT COUNT(*) FROM users WHERE middle_name = ?;"
//! );
//! assert!(count_by("true; DROP TABLE users; --").is_err());
//! ```
//!
//! ## Templates
//!
//! ```
//! use trusted_sql::{Fragments, allowlist, join, wrap};
//!
//! let table = allowlist!("users", "customers").validate("users")?;
//! let columns = allowlist!("first_name", "last_name", "nickname");
//!
//! let mut filters = Fragments::new();
//! for column in ["first_name", "last_name"] {
//!     filters.push(columns.validate(column)? + wrap!(" = ?"));
//! }
//!
//! let query = wrap!("SELECT COUNT(*) FROM {{TABLE}} WHERE {{FILTERS}};")
//!     .replace_all(&wrap!("{{TABLE}}"), &table)
//!     .replace_all(&wrap!("{{FILTERS}}"), &join(&filters, &wrap!(" OR ")));
//!
//! assert_eq!(
//!     query.as_str(),
//!     "SELECT COUNT(*) FROM users WHERE first_name = ? OR last_name = ?;"
//! );
//! # Ok::<(), trusted_sql::ValidationError>(())
//! ```
//!
//! ## What the compiler rejects
//!
//! `wrap!` only takes string literals. A variable is a compile error, even one
//! that happens to hold a constant string:
//!
//! ```compile_fail
//! let column = String::from("middle_name");
//! let _ = trusted_sql::wrap!(column);
//! ```
//!
//! ```compile_fail
//! const COLUMN: &str = "middle_name";
//! let _ = trusted_sql::wrap!(COLUMN);
//! ```
//!
//! ## Residual risk
//!
//! The macros expand to a `#[doc(hidden)]` constructor that has to be `pub` for
//! the expansion to reach it. Code that calls `ValidatedString::__from_literal`
//! by hand with a runtime `&'static str` (for example one produced by
//! `String::leak`) bypasses the literal check. Nothing in the type system can
//! stop that; forbid it in review, or with clippy's `disallowed-methods` in
//! your own crate's `clippy.toml`. Likewise an allowlist item or a literal that
//! itself contains hostile SQL is trusted as written.
//!
//! ## Feature flags
//!
//! - `tracing`: emit `tracing` events when [`Allowlist::validate`] accepts
//!   (`trace`) or rejects (`debug`) a value
//! - `serde`: `Serialize` for [`ValidatedString`] and [`ValidationError`]
//!   (no `Deserialize`)

// Lets the macros' `::trusted_sql::` paths resolve in this crate's own tests
#[cfg(test)]
extern crate self as trusted_sql;

mod allowlist;
mod builder;
mod compose;
mod strconv;
mod string;

pub use allowlist::{Allowlist, ValidationError};
pub use builder::Builder;
pub use compose::{concat, join, replace, replace_all};
pub use strconv::Integer;
pub use string::ValidatedString;

// Re-export macros from trusted-sql-macros
pub use trusted_sql_macros::{allowlist, wrap};

/// An ordered sequence of trusted fragments, e.g. to collect filters for [`join`].
pub type Fragments = Vec<ValidatedString>;

/// Prelude module for convenient imports.
///
/// ```
/// use trusted_sql::prelude::*;
///
/// let order = allowlist!("asc", "desc").must_validate("desc");
/// let query = wrap!("SELECT id FROM users ORDER BY id ") + order;
/// assert_eq!(query.as_str(), "SELECT id FROM users ORDER BY id desc");
/// ```
pub mod prelude {
    pub use crate::{
        Allowlist, Builder, Fragments, ValidatedString, ValidationError, allowlist, concat, join,
        replace, replace_all, wrap,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Filter<'a> {
        column: &'a str,
        value: &'a str,
    }

    fn handcraft(
        table: &str,
        filters: &[Filter<'_>],
    ) -> Result<(String, Vec<String>), ValidationError> {
        let table = allowlist!("users", "customers").validate(table)?;
        let columns = allowlist!("first_name", "middle_name", "last_name", "nickname");

        let mut predicates = Fragments::new();
        let mut params = Vec::new();
        for filter in filters {
            predicates.push(columns.validate(filter.column)? + wrap!(" = ?"));
            params.push(filter.value.to_string());
        }

        let query = wrap!("SELECT COUNT(*) FROM {{TABLE}} WHERE {{FILTERS}};")
            .replace_all(&wrap!("{{TABLE}}"), &table)
            .replace_all(&wrap!("{{FILTERS}}"), &join(&predicates, &wrap!(" OR ")));

        Ok((query.into_string(), params))
    }

    #[test]
    fn test_validate_column_name() {
        let column = allowlist!("first_name", "middle_name", "last_name")
            .validate("middle_name")
            .unwrap();
        assert_eq!(column, "middle_name");

        let query = wrap!("SELECT COUNT(*) FROM users WHERE ") + column + wrap!(" = ?;");
        assert_eq!(
            query.into_string(),
            "SELECT COUNT(*) FROM users WHERE middle_name = ?;"
        );

        assert!(
            allowlist!("first_name", "middle_name", "last_name")
                .validate("true; DROP TABLE users; --")
                .is_err()
        );
    }

    #[test]
    fn test_handcrafted_template() {
        let (sql, params) = handcraft(
            "users",
            &[
                Filter {
                    column: "first_name",
                    value: "John",
                },
                Filter {
                    column: "last_name",
                    value: "Doe",
                },
            ],
        )
        .unwrap();

        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM users WHERE first_name = ? OR last_name = ?;"
        );
        assert_eq!(params, ["John", "Doe"]);
    }

    #[test]
    fn test_handcrafted_template_rejects_column() {
        let err = handcraft(
            "users",
            &[
                Filter {
                    column: "first_name",
                    value: "John",
                },
                Filter {
                    column: "true; DROP TABLE users; --",
                    value: "Doe",
                },
            ],
        )
        .unwrap_err();

        assert_eq!(err.value(), "true; DROP TABLE users; --");
    }

    #[test]
    fn test_handcrafted_template_rejects_table() {
        let err = handcraft("users; --", &[]).unwrap_err();
        assert_eq!(err.allowed(), ["customers", "users"]);
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;

        let mut builder = Builder::new();
        builder.append(wrap!("SELECT 1"));
        let s: ValidatedString = builder.into_validated_string();
        assert_eq!(s, "SELECT 1");
    }
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
