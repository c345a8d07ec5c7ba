// wrap! expands to a const expression and can initialize const items.
use trusted_sql::{ValidatedString, wrap};

const SELECT_USERS: ValidatedString = wrap!("SELECT id ", "FROM users");
const ORDER_BY: ValidatedString = wrap!(r#" ORDER BY "id""#);

fn main() {
    let query = SELECT_USERS + ORDER_BY;
    assert_eq!(query.as_str(), r#"SELECT id FROM users ORDER BY "id""#);
}
