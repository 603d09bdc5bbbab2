pub mod memory_ledger;
