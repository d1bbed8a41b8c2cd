//! Merkle commitments over `(fee_distributor, cumulative_amount)` facts
//!
//! Leaves are hashed twice so a leaf can never be confused with an internal
//! node. Internal nodes hash their children in sorted order, which lets a
//! proof be a plain list of siblings from leaf to root.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;

/// Hash of one `(fee_distributor, amount)` fact: `H(H(key || amount_le))`
pub fn leaf_hash(fee_distributor: &Pubkey, amount: u64) -> [u8; 32] {
    let inner = hashv(&[fee_distributor.as_ref(), &amount.to_le_bytes()[..]]);
    hashv(&[inner.as_ref()]).to_bytes()
}

/// Commutative parent hash
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[&a[..], &b[..]]).to_bytes()
    } else {
        hashv(&[&b[..], &a[..]]).to_bytes()
    }
}

/// Root implied by `leaf` and its sibling path
pub fn process_proof(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling))
}

pub fn verify(proof: &[[u8; 32]], root: &[u8; 32], leaf: [u8; 32]) -> bool {
    process_proof(proof, leaf) == *root
}
