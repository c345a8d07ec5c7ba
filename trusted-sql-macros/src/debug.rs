//! Debug utilities for macro development.
//!
//! Enable with `--features debug-expand` to see pretty-printed macro output.

use proc_macro2::TokenStream;

/// Print pretty-formatted macro expansion to stderr.
///
/// Only active when `debug-expand` feature is enabled.
/// Usage: `cargo build --features debug-expand`
#[cfg(feature = "debug-expand")]
pub fn debug_tokens(name: &str, tokens: &TokenStream) {
    eprintln!("\n=== MACRO EXPAND: {name} ===");
    // Expansions are expressions, so wrap them in a function to get a parsable file
    let wrapped = quote::quote! { fn __expansion() { let _ = #tokens; } };
    if let Ok(file) = syn::parse2::<syn::File>(wrapped) {
        eprintln!("{}", prettyplease::unparse(&file));
    } else {
        eprintln!("{tokens}");
    }
    eprintln!("=== END {name} ===\n");
}

/// No-op when debug-expand feature is disabled.
#[cfg(not(feature = "debug-expand"))]
#[inline]
pub const fn debug_tokens(_name: &str, _tokens: &TokenStream) {}
