//! Error helpers for consistent, informative compile-time errors.

use proc_macro2::Span;
use quote::ToTokens;
use syn::Error;

/// Build an error for an argument that is not a string literal.
pub fn not_a_string_literal(tokens: &impl ToTokens, macro_name: &str, hint: &str) -> Error {
    Error::new_spanned(
        tokens,
        format!("{macro_name}! only accepts string literals; {hint}"),
    )
}

/// Build an error for an invocation without arguments.
pub fn empty_input(span: Span, macro_name: &str, example: &str) -> Error {
    Error::new(
        span,
        format!("{macro_name}! requires at least one string literal, e.g. {example}"),
    )
}

/// Build an error for an allowlist item that appears more than once.
pub fn duplicate_item(span: Span, item: &str) -> Error {
    Error::new(
        span,
        format!("duplicate allowlist item {item:?}; each item can only appear once"),
    )
}
