use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Port for the external token ledger the gate credits allocations through.
///
/// The gate owns the claim bookkeeping; balance storage and transfer
/// semantics live behind this port. Operations are synchronous: the gate is a
/// single-writer state machine and every credit either completes or fails
/// before the next operation is applied.
///
/// Implementations:
/// - `InMemoryLedger` (for tests and demos)
pub trait TokenLedger {
    /// Credit `amount` to `account`. Must be all-or-nothing: on `Err` no
    /// balance change may have been applied.
    fn credit(&mut self, account: Address, amount: U256) -> Result<(), LedgerError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("supply cap exceeded: minted {minted}, cap {cap}")]
    SupplyCapExceeded { minted: U256, cap: U256 },

    #[error("internal ledger error: {0}")]
    Internal(String),
}
