// Literals forwarded through macro_rules as `$lit:literal` are still literals.
use trusted_sql::{allowlist, wrap};

macro_rules! table {
    ($name:literal) => {
        wrap!("SELECT * FROM ", $name)
    };
}

macro_rules! directions {
    ($($dir:literal),+) => {
        allowlist!($($dir),+)
    };
}

fn main() {
    assert_eq!(table!("users").as_str(), "SELECT * FROM users");

    let order = directions!("ASC", "DESC");
    assert_eq!(order.len(), 2);
    assert!(order.validate("DESC").is_ok());
    assert!(order.validate("desc").is_err());
}
