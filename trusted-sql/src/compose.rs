//! Trust-preserving string operations.
//!
//! Every operation takes and returns [`ValidatedString`] only. There is no
//! overload taking a plain `&str` for a separator, pattern or replacement,
//! so nothing unvalidated can be spliced into the result.
//!
//! ```compile_fail
//! use trusted_sql::{join, wrap};
//!
//! let columns = [wrap!("first_name"), wrap!("last_name")];
//! let _ = join(&columns, ", ");
//! ```
//!
//! ```compile_fail
//! use trusted_sql::{replace_all, wrap};
//!
//! let table = String::from("users; --");
//! let _ = replace_all(&wrap!("SELECT * FROM {{TABLE}}"), &wrap!("{{TABLE}}"), &table);
//! ```

use crate::ValidatedString;

/// Concatenate `b` after `a`.
///
/// ```
/// use trusted_sql::{concat, wrap};
///
/// let s = concat(&wrap!("SELECT "), &wrap!("1"));
/// assert_eq!(s.as_str(), "SELECT 1");
/// ```
#[must_use]
pub fn concat(a: &ValidatedString, b: &ValidatedString) -> ValidatedString {
    // Cloning keeps borrowed literals borrowed
    if b.is_empty() {
        return a.clone();
    }
    if a.is_empty() {
        return b.clone();
    }

    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a.as_str());
    out.push_str(b.as_str());
    ValidatedString::from_owned(out)
}

/// Concatenate `elements`, placing `separator` between consecutive elements.
///
/// No elements yields the empty string; a single element is returned as is.
///
/// ```
/// use trusted_sql::{Fragments, join, wrap};
///
/// let filters: Fragments = vec![wrap!("first_name = ?"), wrap!("last_name = ?")];
/// assert_eq!(join(&filters, &wrap!(" OR ")).as_str(), "first_name = ? OR last_name = ?");
/// ```
#[must_use]
pub fn join(elements: &[ValidatedString], separator: &ValidatedString) -> ValidatedString {
    match elements {
        [] => ValidatedString::empty(),
        [only] => only.clone(),
        [first, rest @ ..] => {
            let cap = elements.iter().map(ValidatedString::len).sum::<usize>()
                + separator.len() * rest.len();
            let mut out = String::with_capacity(cap);
            out.push_str(first.as_str());
            for element in rest {
                out.push_str(separator.as_str());
                out.push_str(element.as_str());
            }
            ValidatedString::from_owned(out)
        },
    }
}

/// Replace the first `n` non-overlapping occurrences of `old` in `s` with `new`,
/// scanning left to right.
///
/// If `n` is negative there is no limit, as with [`replace_all`]. An empty `old`
/// matches at the start of `s` and after every character, so up to
/// `chars + 1` replacements happen.
///
/// ```
/// use trusted_sql::{replace, wrap};
///
/// assert_eq!(replace(&wrap!("aaaaa"), &wrap!("a"), &wrap!("b"), 3).as_str(), "bbbaa");
/// assert_eq!(replace(&wrap!("ab"), &wrap!(""), &wrap!("-"), -1).as_str(), "-a-b-");
/// ```
#[must_use]
pub fn replace(
    s: &ValidatedString,
    old: &ValidatedString,
    new: &ValidatedString,
    n: isize,
) -> ValidatedString {
    if old == new {
        return s.clone();
    }
    match usize::try_from(n) {
        Ok(0) => s.clone(),
        Ok(count) => {
            ValidatedString::from_owned(s.as_str().replacen(old.as_str(), new.as_str(), count))
        },
        Err(_) => replace_all(s, old, new),
    }
}

/// Replace every non-overlapping occurrence of `old` in `s` with `new`.
///
/// ```
/// use trusted_sql::{allowlist, replace_all, wrap};
///
/// let tables = allowlist!("users", "customers");
/// let table = tables.validate("customers").unwrap();
///
/// let query = replace_all(&wrap!("SELECT COUNT(*) FROM {{TABLE}};"), &wrap!("{{TABLE}}"), &table);
/// assert_eq!(query.as_str(), "SELECT COUNT(*) FROM customers;");
/// ```
#[must_use]
pub fn replace_all(
    s: &ValidatedString,
    old: &ValidatedString,
    new: &ValidatedString,
) -> ValidatedString {
    if old == new {
        return s.clone();
    }
    ValidatedString::from_owned(s.as_str().replace(old.as_str(), new.as_str()))
}
