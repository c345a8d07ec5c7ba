#![allow(unused)]
use trusted_sql::allowlist;

fn main() {
    let order = allowlist!("asc", "desc", "asc");
}
