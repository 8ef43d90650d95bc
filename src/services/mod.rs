pub mod credential_store;
pub mod score_ledger;

pub use credential_store::*;
pub use score_ledger::*;
