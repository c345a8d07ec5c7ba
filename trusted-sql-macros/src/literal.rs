//! Parsing of literal-only macro arguments.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{
    Expr, ExprLit, Lit, LitStr, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::errors;

const ALLOWLIST_EXAMPLE: &str = r#"allowlist!("first_name", "last_name")"#;

/// Arguments of `wrap!`: one or more string literals.
pub struct WrapInput {
    parts: Vec<LitStr>,
}

impl WrapInput {
    /// All parts joined into a single literal, the way `concat!` would.
    pub fn concatenated(&self) -> LitStr {
        let text: String = self.parts.iter().map(LitStr::value).collect();
        let span = self
            .parts
            .first()
            .map_or_else(Span::call_site, LitStr::span);
        LitStr::new(&text, span)
    }
}

impl Parse for WrapInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let parts = parse_literals(
            input,
            "wrap",
            "validate runtime values with an Allowlist instead",
            r#"wrap!("SELECT * FROM users")"#,
        )?;
        Ok(Self { parts })
    }
}

/// Arguments of `allowlist!`: at least one distinct string literal.
pub struct AllowlistInput {
    pub first: LitStr,
    pub rest: Vec<LitStr>,
}

impl Parse for AllowlistInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = parse_literals(
            input,
            "allowlist",
            "allowlist items must be written in source code",
            ALLOWLIST_EXAMPLE,
        )?;

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.value()) {
                return Err(errors::duplicate_item(item.span(), &item.value()));
            }
        }

        let mut items = items.into_iter();
        let first = items
            .next()
            .ok_or_else(|| errors::empty_input(input.span(), "allowlist", ALLOWLIST_EXAMPLE))?;

        Ok(Self {
            first,
            rest: items.collect(),
        })
    }
}

/// Parse a comma-separated list of string literals, rejecting anything else.
fn parse_literals(
    input: ParseStream,
    macro_name: &str,
    hint: &str,
    example: &str,
) -> Result<Vec<LitStr>> {
    if input.is_empty() {
        return Err(errors::empty_input(input.span(), macro_name, example));
    }

    let exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
    exprs
        .into_iter()
        .map(|expr| string_literal(expr, macro_name, hint))
        .collect()
}

fn string_literal(expr: Expr, macro_name: &str, hint: &str) -> Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit),
            attrs,
        }) if attrs.is_empty() => Ok(lit),
        // `$lit:literal` forwarded through macro_rules arrives in an invisible group
        Expr::Group(group) => string_literal(*group.expr, macro_name, hint),
        other => Err(errors::not_a_string_literal(&other, macro_name, hint)),
    }
}
