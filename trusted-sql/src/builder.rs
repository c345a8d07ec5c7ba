//! Efficient accumulation of trusted fragments.

use std::borrow::Borrow;

use crate::ValidatedString;

/// A growable buffer that only accepts [`ValidatedString`] fragments.
///
/// Appending reuses one buffer, so building a long statement piece by piece
/// costs amortized O(1) per fragment instead of copying on every `+`.
///
/// Mutation goes through `&mut self`, so a builder has exactly one writer at a
/// time. It does not implement `std::fmt::Write`:
///
/// ```compile_fail
/// use std::fmt::Write;
///
/// let mut builder = trusted_sql::Builder::new();
/// write!(builder, "{}", "1 OR 1=1").unwrap();
/// ```
///
/// ```compile_fail
/// let mut builder = trusted_sql::Builder::new();
/// builder.append("users");
/// ```
///
/// # Example
///
/// ```
/// use trusted_sql::{Builder, allowlist, wrap};
///
/// let columns = allowlist!("first_name", "middle_name", "last_name", "nickname");
///
/// let mut builder = Builder::new();
/// builder.append(wrap!("SELECT COUNT(*) FROM users WHERE "));
/// for (i, column) in ["middle_name", "nickname"].into_iter().enumerate() {
///     if i != 0 {
///         builder.append(wrap!(" OR "));
///     }
///     builder.append(columns.validate(column)?).append(wrap!(" = ?"));
/// }
/// builder.append(wrap!(";"));
///
/// assert_eq!(
///     builder.to_plain_string(),
///     "SELECT COUNT(*) FROM users WHERE middle_name = ? OR nickname = ?;"
/// );
/// # Ok::<(), trusted_sql::ValidationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    buf: String,
}

impl Builder {
    /// Create an empty builder. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Create an empty builder with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Append a fragment. Returns `self` so calls can be chained.
    pub fn append(&mut self, fragment: impl Borrow<ValidatedString>) -> &mut Self {
        self.buf.push_str(fragment.borrow().as_str());
        self
    }

    /// Ensure at least `additional` more bytes can be appended without reallocating.
    ///
    /// The count is unsigned, so a negative growth request does not compile.
    pub fn grow(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Number of accumulated bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been appended since creation or the last reset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes allocated for the buffer, including those already used.
    ///
    /// Always at least [`len`](Self::len), and `0` right after [`reset`](Self::reset).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Drop the content and release the allocation.
    pub fn reset(&mut self) {
        self.buf = String::new();
    }

    /// The accumulated text as a trusted string.
    #[must_use]
    pub fn to_validated_string(&self) -> ValidatedString {
        ValidatedString::from_owned(self.buf.clone())
    }

    /// Consume the builder without copying the buffer.
    #[must_use]
    pub fn into_validated_string(self) -> ValidatedString {
        ValidatedString::from_owned(self.buf)
    }

    /// The accumulated text as a plain `String`, for handing to the SQL driver.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        self.buf.clone()
    }
}

impl Extend<ValidatedString> for Builder {
    fn extend<I: IntoIterator<Item = ValidatedString>>(&mut self, iter: I) {
        for fragment in iter {
            self.append(fragment);
        }
    }
}

impl<'a> Extend<&'a ValidatedString> for Builder {
    fn extend<I: IntoIterator<Item = &'a ValidatedString>>(&mut self, iter: I) {
        for fragment in iter {
            self.append(fragment);
        }
    }
}

impl FromIterator<ValidatedString> for Builder {
    fn from_iter<I: IntoIterator<Item = ValidatedString>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl From<Builder> for ValidatedString {
    fn from(builder: Builder) -> Self {
        builder.into_validated_string()
    }
}
