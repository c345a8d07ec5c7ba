// Test wrap! macro expansion
use trusted_sql::wrap;

fn main() {
    let query = wrap!("SELECT * ", "FROM users");
    let _ = query;
}
