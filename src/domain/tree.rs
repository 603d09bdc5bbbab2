use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, B256};
use thiserror::Error;

use crate::domain::leaf::leaf_hash;
use crate::domain::merkle::{hash_pair, MerkleProof};

/// Errors from commitment construction and proof extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("whitelist is empty")]
    EmptyWhitelist,

    #[error("duplicate whitelist entry: {0}")]
    DuplicateEntry(Address),

    #[error("not a member of the whitelist: {0}")]
    NotAMember(Address),
}

/// Merkle commitment over a whitelist of addresses.
///
/// Built once, offline, per whitelist version. Leaves are sorted ascending by
/// hash before pairing, so the root depends only on the *set* of addresses,
/// not on the input order. An unpaired trailing node at any level is promoted
/// unchanged to the next level (and contributes no sibling to proofs through
/// it).
///
/// The gate never holds one of these — it stores only the root. Proofs are
/// extracted here and delivered to claimants out-of-band.
#[derive(Debug)]
pub struct WhitelistTree {
    /// All node levels, leaves first, root level last.
    levels: Vec<Vec<B256>>,
    /// Position of each member's leaf in the sorted bottom level.
    index_of: HashMap<Address, usize>,
}

impl WhitelistTree {
    /// Build the commitment over `identities`.
    ///
    /// Fails on an empty list or on duplicate addresses; otherwise total.
    pub fn build(identities: &[Address]) -> Result<Self, TreeError> {
        if identities.is_empty() {
            return Err(TreeError::EmptyWhitelist);
        }

        let mut entries: Vec<(B256, Address)> = Vec::with_capacity(identities.len());
        let mut seen: HashSet<Address> = HashSet::with_capacity(identities.len());
        for &identity in identities {
            if !seen.insert(identity) {
                return Err(TreeError::DuplicateEntry(identity));
            }
            entries.push((leaf_hash(identity), identity));
        }

        // Canonical leaf order: ascending by leaf hash. Distinct addresses
        // yield distinct leaves, so the order is total.
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let index_of = entries
            .iter()
            .enumerate()
            .map(|(i, &(_, identity))| (identity, i))
            .collect();

        let mut levels = vec![entries.into_iter().map(|(leaf, _)| leaf).collect::<Vec<_>>()];
        while levels.last().expect("at least one level").len() > 1 {
            let level = levels.last().expect("at least one level");
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_pair(*left, *right)),
                    // Odd trailing node: promote unchanged.
                    [lone] => next.push(*lone),
                    _ => unreachable!("chunks(2) yields 1 or 2 nodes"),
                }
            }
            levels.push(next);
        }

        Ok(Self { levels, index_of })
    }

    /// The commitment root.
    pub fn root(&self) -> B256 {
        self.levels.last().expect("root level")[0]
    }

    /// Number of whitelisted addresses.
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// A built tree always has at least one leaf.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `identity` is part of the committed whitelist.
    pub fn contains(&self, identity: Address) -> bool {
        self.index_of.contains_key(&identity)
    }

    /// Extract the membership proof for `identity`.
    pub fn proof_of(&self, identity: Address) -> Result<MerkleProof, TreeError> {
        let mut index = *self
            .index_of
            .get(&identity)
            .ok_or(TreeError::NotAMember(identity))?;

        let mut siblings = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            index /= 2;
        }

        Ok(MerkleProof::new(siblings))
    }
}
