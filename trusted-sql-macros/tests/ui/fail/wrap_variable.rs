#![allow(unused)]
use trusted_sql::wrap;

fn main() {
    let column = "middle_name";
    let query = wrap!(column);
}
