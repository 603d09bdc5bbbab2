use alloy_primitives::{keccak256, Address, B256};

/// Encode a whitelist identity into the 32-byte word that gets hashed into a
/// leaf: the address left-padded with zeros, ABI style.
///
/// This encoding is injective over 20-byte addresses and must match on both
/// the builder and verifier side — it is the only place the raw identity
/// enters the hash domain.
pub fn encode_identity(identity: Address) -> B256 {
    B256::left_padding_from(identity.as_slice())
}

/// Hash an identity into its Merkle leaf.
///
/// The encoding is hashed twice (`keccak256(keccak256(encoded))`), the
/// OpenZeppelin standard-tree leaf rule. The double hash keeps leaves in a
/// separate domain from internal nodes, so a proof sibling can never be
/// reinterpreted as a leaf.
pub fn leaf_hash(identity: Address) -> B256 {
    keccak256(keccak256(encode_identity(identity)))
}
