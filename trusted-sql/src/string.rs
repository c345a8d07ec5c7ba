//! The trusted string type.
//!
//! A [`ValidatedString`] only comes into existence through:
//! - [`wrap!`](crate::wrap), for string literals written in source code
//! - [`Allowlist::validate`](crate::Allowlist::validate) and
//!   [`Allowlist::must_validate`](crate::Allowlist::must_validate)
//! - [`ValidatedString::from_integer`], for decimal integers
//! - composition of other `ValidatedString`s ([`concat`](crate::concat),
//!   [`join`](crate::join), [`replace`](crate::replace),
//!   [`replace_all`](crate::replace_all), `+`, and [`Builder`](crate::Builder))
//!
//! Leaving the type is always allowed ([`as_str`](ValidatedString::as_str),
//! [`into_string`](ValidatedString::into_string), `Display`); coming back is not.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::compose;

/// A string whose every byte came from a trusted source.
///
/// Literals and allowlist hits are stored borrowed (`&'static str`), so wrapping
/// and validating do not allocate. Composition produces an owned buffer.
///
/// There is no `From<String>`, `From<&str>`, `FromStr` or
/// `Deserialize` implementation.
///
/// ```compile_fail
/// use trusted_sql::ValidatedString;
///
/// let column = String::from("name; DROP TABLE users");
/// let _: ValidatedString = column.into();
/// ```
///
/// ```compile_fail
/// let _ = trusted_sql::wrap!("SELECT ") + "name";
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatedString(Cow<'static, str>);

impl ValidatedString {
    /// Expansion target of [`wrap!`](crate::wrap) and [`allowlist!`](crate::allowlist).
    ///
    /// Not part of the public API. Calling this directly with anything other
    /// than a string literal defeats the whole crate; search for it in review.
    #[doc(hidden)]
    #[must_use]
    pub const fn __from_literal(literal: &'static str) -> Self {
        Self(Cow::Borrowed(literal))
    }

    pub(crate) const fn from_owned(text: String) -> Self {
        Self(Cow::Owned(text))
    }

    /// The empty string.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(""))
    }

    /// Borrow the text, e.g. to pass it to a SQL driver.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into a plain `String` at the trust boundary.
    ///
    /// This is one-way: the result cannot be turned back into a
    /// `ValidatedString` without going through an [`Allowlist`](crate::Allowlist).
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate `other` after `self`. Same as [`concat`](crate::concat).
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        compose::concat(self, other)
    }

    /// Replace the first `n` occurrences of `old` with `new`; all of them if `n < 0`.
    /// Same as [`replace`](crate::replace).
    #[must_use]
    pub fn replace(&self, old: &Self, new: &Self, n: isize) -> Self {
        compose::replace(self, old, new, n)
    }

    /// Replace every occurrence of `old` with `new`. Same as [`replace_all`](crate::replace_all).
    #[must_use]
    pub fn replace_all(&self, old: &Self, new: &Self) -> Self {
        compose::replace_all(self, old, new)
    }
}

impl fmt::Debug for ValidatedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedString").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ValidatedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ValidatedString> for String {
    fn from(value: ValidatedString) -> Self {
        value.into_string()
    }
}

impl AsRef<str> for ValidatedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeSet<ValidatedString>` be probed with a plain `&str`.
impl Borrow<str> for ValidatedString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ValidatedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ValidatedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ValidatedString> for &str {
    fn eq(&self, other: &ValidatedString) -> bool {
        *self == other.as_str()
    }
}

impl Add for ValidatedString {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self + &rhs
    }
}

impl Add<&Self> for ValidatedString {
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign<&Self> for ValidatedString {
    fn add_assign(&mut self, rhs: &Self) {
        if rhs.is_empty() {
            return;
        }
        if self.is_empty() {
            self.clone_from(rhs);
            return;
        }
        self.0.to_mut().push_str(rhs.as_str());
    }
}

impl AddAssign for ValidatedString {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl FromIterator<Self> for ValidatedString {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, fragment| acc + fragment)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidatedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap;

    #[test]
    fn wrap_then_unwrap_is_identity() {
        assert_eq!(wrap!("foo").into_string(), "foo");
        assert_eq!(wrap!("").into_string(), "");
        assert_eq!(wrap!("SELECT ", "* FROM users").as_str(), "SELECT * FROM users");
    }

    #[test]
    fn wrap_works_in_const_items() {
        const QUERY: ValidatedString = wrap!("SELECT 1");
        assert_eq!(QUERY, "SELECT 1");
    }

    #[test]
    fn display_and_string_conversion() {
        let s = wrap!("users");
        assert_eq!(s.to_string(), "users");
        assert_eq!(String::from(s), "users");
    }

    #[test]
    fn debug_shows_content() {
        assert_eq!(format!("{:?}", wrap!("a\"b")), r#"ValidatedString("a\"b")"#);
    }

    #[test]
    fn add_concatenates_in_order() {
        let column = wrap!("middle_name");
        let query = wrap!("SELECT COUNT(*) FROM users WHERE ") + &column + wrap!(" = ?;");
        assert_eq!(query, "SELECT COUNT(*) FROM users WHERE middle_name = ?;");
    }

    #[test]
    fn add_assign_with_empty_sides() {
        let mut s = ValidatedString::empty();
        s += wrap!("a");
        s += ValidatedString::empty();
        s += &wrap!("b");
        assert_eq!(s, "ab");
    }

    #[test]
    fn add_borrowed_keeps_right_operand() {
        let sep = wrap!(", ");
        let mut s = wrap!("a") + &sep;
        s += &sep;
        assert_eq!(s, "a, , ");
        assert_eq!(sep, ", ");
    }

    #[test]
    fn collect_concatenates() {
        let s: ValidatedString = [wrap!("a"), wrap!("b"), wrap!("c")].into_iter().collect();
        assert_eq!(s, "abc");

        let empty: ValidatedString = std::iter::empty().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(ValidatedString::default(), ValidatedString::empty());
        assert_eq!(ValidatedString::default().len(), 0);
    }

    #[test]
    fn methods_match_free_functions() {
        let s = wrap!("aaaaa");
        assert_eq!(s.replace(&wrap!("a"), &wrap!("b"), 3), "bbbaa");
        assert_eq!(s.replace_all(&wrap!("a"), &wrap!("b")), "bbbbb");
        assert_eq!(s.concat(&wrap!("!")), "aaaaa!");
    }
}
