//! Handcrafting SQL from request input.
//!
//! Run with: cargo run -p trusted-sql --example handcrafted_sql

#![allow(missing_docs)]

use trusted_sql::{Builder, Fragments, ValidatedString, ValidationError, allowlist, join, wrap};

/// A filter as it might arrive in a query string: `?filter=nickname:Larry`.
struct Filter {
    column: String,
    value: String,
}

impl Filter {
    fn new(column: &str, value: &str) -> Self {
        Self {
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

/// Template style: placeholders replaced with validated fragments.
fn search_template(table: &str, filters: &[Filter]) -> Result<(String, Vec<String>), ValidationError> {
    let table = allowlist!("users", "customers").validate(table)?;
    let columns = allowlist!("first_name", "middle_name", "last_name", "nickname");

    let mut predicates = Fragments::new();
    let mut params = Vec::new();
    for filter in filters {
        predicates.push(columns.validate(&filter.column)? + wrap!(" = ?"));
        params.push(filter.value.clone());
    }

    let query = wrap!("SELECT COUNT(*) FROM {{TABLE}} WHERE {{FILTERS}};")
        .replace_all(&wrap!("{{TABLE}}"), &table)
        .replace_all(&wrap!("{{FILTERS}}"), &join(&predicates, &wrap!(" OR ")));

    Ok((query.into_string(), params))
}

/// Builder style: fragments appended in order, with numbered placeholders.
fn search_builder(filters: &[Filter], page_size: u32) -> Result<(String, Vec<String>), ValidationError> {
    let columns = allowlist!("first_name", "middle_name", "last_name", "nickname");

    let mut builder = Builder::new();
    let mut params = Vec::new();

    builder.append(wrap!("SELECT id FROM users WHERE "));
    for (i, filter) in filters.iter().enumerate() {
        if i != 0 {
            builder.append(wrap!(" OR "));
        }
        builder
            .append(columns.validate(&filter.column)?)
            .append(wrap!(" = $"))
            .append(ValidatedString::from_integer(i + 1));
        params.push(filter.value.clone());
    }
    builder
        .append(wrap!(" LIMIT "))
        .append(ValidatedString::from_integer(page_size));

    Ok((builder.to_plain_string(), params))
}

fn main() {
    let filters = [Filter::new("middle_name", "Larry"), Filter::new("nickname", "Larry")];

    match search_template("users", &filters) {
        Ok((sql, params)) => println!("template: {sql}  params: {params:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    match search_builder(&filters, 20) {
        Ok((sql, params)) => println!("builder:  {sql}  params: {params:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    let hostile = [Filter::new("true; DROP TABLE users; --", "Larry")];
    match search_builder(&hostile, 20) {
        Ok((sql, _)) => println!("builder:  {sql}"),
        Err(err) => println!("rejected: {err}"),
    }
}
