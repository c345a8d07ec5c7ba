// Test allowlist! macro expansion
use trusted_sql::allowlist;

fn main() {
    let order = allowlist!("ASC", "DESC");
    let _ = order;
}
