#![allow(unused)]
use trusted_sql::wrap;

fn main() {
    let query = wrap!(42);
}
