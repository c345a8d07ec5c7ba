use trusted_sql::allowlist;
fn main() {
    let order = {
        let __rest: [::trusted_sql::ValidatedString; 1usize] = [
            ::trusted_sql::ValidatedString::__from_literal("DESC"),
        ];
        ::trusted_sql::Allowlist::new(
            ::trusted_sql::ValidatedString::__from_literal("ASC"),
            __rest,
        )
    };
    let _ = order;
}
