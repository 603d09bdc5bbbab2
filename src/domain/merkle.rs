use alloy_primitives::{keccak256, Address, B256};
use serde::{Deserialize, Serialize};

use crate::domain::leaf::leaf_hash;

/// Membership proof: the sibling hashes along the path from a leaf to the
/// root, bottom level first.
///
/// Proofs carry no left/right positional bits — the pair-combination rule is
/// commutative, so the verifier never needs to know which side a sibling was
/// on. Levels where the running node was promoted unpaired contribute no
/// sibling at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub siblings: Vec<B256>,
}

impl MerkleProof {
    pub fn new(siblings: Vec<B256>) -> Self {
        Self { siblings }
    }

    /// Number of siblings in the path.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}

/// Combine two nodes into their parent: `keccak256(min || max)`.
///
/// Sorting the pair before hashing makes the combination commutative, which
/// is what lets proofs be flat sibling lists. Builder and verifier must use
/// this exact rule; this is the same commutative `hashPair` the OpenZeppelin
/// standard tree uses.
pub fn hash_pair(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}

/// Check a membership proof for `identity` against `root`.
///
/// Recomputes the root by folding the identity's leaf hash through the
/// sibling path and compares. Pure and total: malformed proofs (wrong
/// length, wrong siblings, wrong root) simply return `false`, so the gate
/// can surface a uniform rejection. O(proof length).
pub fn verify_membership(identity: Address, proof: &MerkleProof, root: B256) -> bool {
    let mut current = leaf_hash(identity);
    for sibling in &proof.siblings {
        current = hash_pair(current, *sibling);
    }
    current == root
}
