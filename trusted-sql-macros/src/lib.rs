//! Proc-macros for trusted-sql - compile-time gates for trusted SQL fragments.
//!
//! Both macros only accept string literals written at the call site. A variable,
//! a function call, or any other expression is rejected while the crate is being
//! compiled, so a runtime value can never become a `ValidatedString` through them.

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

mod debug;
mod errors;
mod literal;

use literal::{AllowlistInput, WrapInput};

/// Wrap one or more string literals into a `ValidatedString`.
///
/// Multiple literals are concatenated at compile time, like `concat!`.
/// The expansion is a `const` expression, so it can initialize `const` items.
///
/// # Example
/// ```ignore
/// const COUNT: ValidatedString = wrap!("SELECT COUNT(*) FROM users");
/// let query = wrap!("SELECT * ", "FROM users WHERE ") + column + wrap!(" = ?");
/// ```
#[proc_macro]
pub fn wrap(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as WrapInput);
    let text = input.concatenated();

    let tokens = quote! {
        ::trusted_sql::ValidatedString::__from_literal(#text)
    };

    debug::debug_tokens("wrap", &tokens);
    TokenStream::from(tokens)
}

/// Build an `Allowlist` from one or more string literals.
///
/// Duplicate items are a compile error, as is an empty list.
///
/// # Example
/// ```ignore
/// let columns = allowlist!("first_name", "middle_name", "last_name");
/// let column = columns.validate(user_supplied)?;
/// ```
#[proc_macro]
pub fn allowlist(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as AllowlistInput);

    let first = &input.first;
    let rest = &input.rest;
    let rest_len = rest.len();

    let tokens = quote! {
        {
            let __rest: [::trusted_sql::ValidatedString; #rest_len] = [
                #( ::trusted_sql::ValidatedString::__from_literal(#rest) ),*
            ];
            ::trusted_sql::Allowlist::new(
                ::trusted_sql::ValidatedString::__from_literal(#first),
                __rest,
            )
        }
    };

    debug::debug_tokens("allowlist", &tokens);
    TokenStream::from(tokens)
}
