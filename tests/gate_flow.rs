//! End-to-end claim flow: build a commitment offline, install the root in a
//! gate, claim against it, and rotate to a new whitelist. Mirrors the flow a
//! deployment runs — builder offline, proofs delivered out-of-band, gate
//! enforcing one-time claims.

use alloy_primitives::{Address, U256};

use claim_gate::adapters::memory_ledger::InMemoryLedger;
use claim_gate::domain::merkle::{verify_membership, MerkleProof};
use claim_gate::domain::tree::WhitelistTree;
use claim_gate::gate::{ClaimGate, GateError, CLAIM_AMOUNT};

#[test]
fn full_claim_lifecycle() {
    let admin = Address::repeat_byte(0xAD);
    let alice = Address::repeat_byte(0xA1);
    let bob = Address::repeat_byte(0xB1);
    let carol = Address::repeat_byte(0xC1); // never whitelisted in round one

    // === Offline: build the commitment over {alice, bob} ===
    let tree = WhitelistTree::build(&[alice, bob]).unwrap();
    let alice_proof = tree.proof_of(alice).unwrap();
    let bob_proof = tree.proof_of(bob).unwrap();

    // Sanity: the proofs verify standalone before the gate ever sees them.
    assert!(verify_membership(alice, &alice_proof, tree.root()));
    assert!(verify_membership(bob, &bob_proof, tree.root()));

    // === Deploy the gate with the root ===
    let mut gate = ClaimGate::new(admin, tree.root(), InMemoryLedger::new());

    // Alice claims her allocation.
    let receipt = gate.mint(alice, &alice_proof).unwrap();
    assert_eq!(receipt.amount, CLAIM_AMOUNT);
    assert_eq!(gate.ledger().balance_of(alice), CLAIM_AMOUNT);

    // Replaying the same proof fails, however often it is retried.
    let err = gate.mint(alice, &alice_proof).unwrap_err();
    assert!(matches!(err, GateError::AlreadyClaimed(a) if a == alice));
    let err = gate.mint(alice, &alice_proof).unwrap_err();
    assert!(matches!(err, GateError::AlreadyClaimed(_)));
    assert_eq!(gate.ledger().balance_of(alice), CLAIM_AMOUNT);

    // Carol is not whitelisted; an empty proof is rejected.
    let err = gate.mint(carol, &MerkleProof::default()).unwrap_err();
    assert!(matches!(err, GateError::NotWhitelisted(c) if c == carol));

    // Bob still claims fine after all the failed attempts.
    gate.mint(bob, &bob_proof).unwrap();
    assert_eq!(gate.ledger().total_minted(), CLAIM_AMOUNT * U256::from(2));

    // === Root rotation: new whitelist {carol}, alice dropped ===
    let next = WhitelistTree::build(&[carol]).unwrap();

    // Only the admin may rotate.
    let err = gate.set_root(next.root(), bob).unwrap_err();
    assert!(matches!(err, GateError::Unauthorized(b) if b == bob));
    assert_eq!(gate.root(), tree.root());

    gate.set_root(next.root(), admin).unwrap();
    assert_eq!(gate.root(), next.root());

    // Alice stays claimed even though she is absent from the new whitelist,
    // and her old proof no longer opens the gate.
    assert!(gate.is_claimed(alice));
    let err = gate.mint(alice, &alice_proof).unwrap_err();
    assert!(matches!(err, GateError::NotWhitelisted(_)));

    // Carol claims under the new root.
    let carol_proof = next.proof_of(carol).unwrap();
    gate.mint(carol, &carol_proof).unwrap();
    assert_eq!(gate.ledger().balance_of(carol), CLAIM_AMOUNT);
    assert!(gate.is_claimed(carol));
}

#[test]
fn proofs_do_not_cross_whitelists() {
    let admin = Address::repeat_byte(0xAD);
    let alice = Address::repeat_byte(0xA1);

    // Alice appears in both whitelists, but the trees differ.
    let round_one = WhitelistTree::build(&[alice, Address::repeat_byte(0xB1)]).unwrap();
    let round_two = WhitelistTree::build(&[alice, Address::repeat_byte(0xB2)]).unwrap();

    let mut gate = ClaimGate::new(admin, round_two.root(), InMemoryLedger::new());

    // A proof extracted from round one does not verify against round two.
    let stale = round_one.proof_of(alice).unwrap();
    let err = gate.mint(alice, &stale).unwrap_err();
    assert!(matches!(err, GateError::NotWhitelisted(_)));

    // The matching proof works.
    gate.mint(alice, &round_two.proof_of(alice).unwrap()).unwrap();
}

#[test]
fn larger_whitelist_all_members_claim_exactly_once() {
    let admin = Address::repeat_byte(0xAD);
    // 13 members: odd count exercises promoted nodes at several levels.
    let identities: Vec<Address> = (1..=13u8).map(Address::repeat_byte).collect();

    let tree = WhitelistTree::build(&identities).unwrap();
    let mut gate = ClaimGate::new(admin, tree.root(), InMemoryLedger::new());

    for &identity in &identities {
        let proof = tree.proof_of(identity).unwrap();
        gate.mint(identity, &proof).unwrap();
        assert!(matches!(
            gate.mint(identity, &proof).unwrap_err(),
            GateError::AlreadyClaimed(_)
        ));
    }

    assert_eq!(
        gate.ledger().total_minted(),
        CLAIM_AMOUNT * U256::from(identities.len() as u64)
    );
}
