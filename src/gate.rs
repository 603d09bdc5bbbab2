use std::collections::HashSet;

use alloy_primitives::{Address, B256, U256};
use thiserror::Error;

use crate::domain::merkle::{verify_membership, MerkleProof};
use crate::ports::token_ledger::{LedgerError, TokenLedger};

/// Fixed allocation credited on a successful claim: 2 * 10^18 base units.
pub const CLAIM_AMOUNT: U256 = U256::from_limbs([2_000_000_000_000_000_000, 0, 0, 0]);

/// Error type for claim and admin operations.
///
/// The three rejection causes stay distinct on purpose: "not eligible",
/// "already claimed" and "not authorized" drive different caller remediation
/// and must never collapse into one generic error.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("not whitelisted under the current root: {0}")]
    NotWhitelisted(Address),

    #[error("allocation already claimed: {0}")]
    AlreadyClaimed(Address),

    #[error("unauthorized: {0} is not the admin")]
    Unauthorized(Address),

    #[error("credit failed: {0}")]
    Credit(#[from] LedgerError),
}

/// Receipt for a successful claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub identity: Address,
    pub amount: U256,
}

/// The claim state machine: one whitelist commitment root, one claimed flag
/// per identity, and the token-ledger port the allocation is credited
/// through.
///
/// Per identity the only transition is not-claimed → claimed; there is no
/// unclaim or reset. Rotating the root (admin only) never touches claim
/// flags, so an identity that claimed under an old root stays claimed even
/// if absent from the new whitelist.
///
/// All mutation goes through `&mut self`, so operations are serialized by
/// construction and a double-claim race cannot occur.
#[derive(Debug)]
pub struct ClaimGate<L: TokenLedger> {
    admin: Address,
    root: B256,
    claimed: HashSet<Address>,
    ledger: L,
}

impl<L: TokenLedger> ClaimGate<L> {
    /// Construct a gate with its admin and initial commitment root.
    pub fn new(admin: Address, initial_root: B256, ledger: L) -> Self {
        Self {
            admin,
            root: initial_root,
            claimed: HashSet::new(),
            ledger,
        }
    }

    /// Claim the fixed allocation for `identity`.
    ///
    /// Requires a membership proof valid against the *currently stored* root
    /// and an unclaimed identity. The credit and the claim flag are
    /// all-or-nothing: the flag is only set after the ledger accepted the
    /// credit, so a failed credit leaves the identity free to retry.
    pub fn mint(
        &mut self,
        identity: Address,
        proof: &MerkleProof,
    ) -> Result<ClaimReceipt, GateError> {
        if !verify_membership(identity, proof, self.root) {
            return Err(GateError::NotWhitelisted(identity));
        }
        if self.claimed.contains(&identity) {
            return Err(GateError::AlreadyClaimed(identity));
        }

        self.ledger.credit(identity, CLAIM_AMOUNT)?;
        self.claimed.insert(identity);

        tracing::info!(%identity, amount = %CLAIM_AMOUNT, "allocation claimed");
        Ok(ClaimReceipt {
            identity,
            amount: CLAIM_AMOUNT,
        })
    }

    /// Replace the commitment root. Admin only.
    ///
    /// The new root is installed unconditionally — no shape or liveness
    /// validation; supplying a root that matches an actual whitelist is the
    /// caller's responsibility. Prior claims are unaffected.
    pub fn set_root(&mut self, new_root: B256, caller: Address) -> Result<(), GateError> {
        if caller != self.admin {
            return Err(GateError::Unauthorized(caller));
        }
        let old_root = std::mem::replace(&mut self.root, new_root);
        tracing::info!(%old_root, %new_root, "commitment root rotated");
        Ok(())
    }

    /// The currently stored commitment root.
    pub fn root(&self) -> B256 {
        self.root
    }

    /// The admin identity, fixed at construction.
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Whether `identity` has already claimed. Unknown identities are
    /// unclaimed by definition.
    pub fn is_claimed(&self, identity: Address) -> bool {
        self.claimed.contains(&identity)
    }

    /// Read access to the ledger behind the gate.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
