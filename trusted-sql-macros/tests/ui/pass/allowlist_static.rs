// An allowlist can live in a static and be shared across threads.
use std::sync::LazyLock;
use trusted_sql::{Allowlist, allowlist};

static COLUMNS: LazyLock<Allowlist> =
    LazyLock::new(|| allowlist!("first_name", "middle_name", "last_name"));

fn main() {
    let handle = std::thread::spawn(|| COLUMNS.validate("middle_name").is_ok());
    assert!(handle.join().unwrap());
    assert!(COLUMNS.validate("nickname").is_err());
}
