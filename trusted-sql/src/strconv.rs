//! Integer to trusted string conversion.
//!
//! The decimal rendering of an integer is digits with an optional leading `-`,
//! which cannot change the structure of a statement. That makes it safe to
//! splice into SQL directly, e.g. for `LIMIT`/`OFFSET` or `$n` placeholders.

use crate::ValidatedString;

// `pub` so it can bound the public `Integer`; the module keeps it unnameable
#[allow(unreachable_pub)]
mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by [`ValidatedString::from_integer`].
///
/// Sealed: floats and arbitrary `Display` types are not accepted, since their
/// rendering is not restricted to digits.
pub trait Integer: sealed::Sealed + std::fmt::Display + Copy {}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integer for $ty {}
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl ValidatedString {
    /// Render an integer in decimal.
    ///
    /// ```
    /// use trusted_sql::{ValidatedString, wrap};
    ///
    /// let page_size = 25_u32;
    /// let query = wrap!("SELECT id FROM users LIMIT ") + ValidatedString::from_integer(page_size);
    /// assert_eq!(query.as_str(), "SELECT id FROM users LIMIT 25");
    /// ```
    #[must_use]
    pub fn from_integer<I: Integer>(value: I) -> Self {
        Self::from_owned(value.to_string())
    }
}
