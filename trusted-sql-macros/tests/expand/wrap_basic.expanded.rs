use trusted_sql::wrap;
fn main() {
    let query = ::trusted_sql::ValidatedString::__from_literal("SELECT * FROM users");
    let _ = query;
}
