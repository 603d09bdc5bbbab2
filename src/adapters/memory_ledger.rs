use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::ports::token_ledger::{LedgerError, TokenLedger};

/// In-memory implementation of `TokenLedger` for tests and demos.
///
/// Holds balances in a plain map. An optional supply cap makes the credit
/// failure path reachable: once cumulative minting would exceed the cap,
/// `credit` rejects without touching any balance.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<Address, U256>,
    minted: U256,
    supply_cap: Option<U256>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger that rejects credits once `cap` total units have been minted.
    pub fn with_supply_cap(cap: U256) -> Self {
        Self {
            supply_cap: Some(cap),
            ..Self::default()
        }
    }

    /// Balance of `account`, zero if never credited.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    /// Total units minted so far.
    pub fn total_minted(&self) -> U256 {
        self.minted
    }
}

impl TokenLedger for InMemoryLedger {
    fn credit(&mut self, account: Address, amount: U256) -> Result<(), LedgerError> {
        let minted = self
            .minted
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Internal("minted total overflow".into()))?;

        if let Some(cap) = self.supply_cap {
            if minted > cap {
                return Err(LedgerError::SupplyCapExceeded {
                    minted: self.minted,
                    cap,
                });
            }
        }

        *self.balances.entry(account).or_insert(U256::ZERO) += amount;
        self.minted = minted;
        Ok(())
    }
}
