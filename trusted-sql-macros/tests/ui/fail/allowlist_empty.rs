#![allow(unused)]
use trusted_sql::allowlist;

fn main() {
    let columns = allowlist!();
}
