mod model {
    #[derive(tyname::TypeName)]
    pub struct Account;

    #[derive(tyname::TypeName)]
    #[canonical_name = "model::Ledger"]
    pub struct Ledger {
        pub balance: u64,
    }
}

const ACCOUNT: &str = tyname::type_name::<model::Account>();
const LEDGER: u64 = tyname::type_hash::<tyname::Const<model::Ledger>>();

fn main() {
    assert_eq!(ACCOUNT, "Account");
    assert_eq!(LEDGER, tyname::fnv1a_64(b"const model::Ledger"));
}
