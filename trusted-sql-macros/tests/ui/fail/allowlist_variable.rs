#![allow(unused)]
use trusted_sql::allowlist;

fn main() {
    let column = String::from("nickname");
    let columns = allowlist!("first_name", column);
}
