pub mod token_ledger;
