//! Sided merkle inclusion proof verification.
//!
//! ## Security: domain separation via prefixes
//!
//! Leaf and internal node hashes use distinct prefix bytes
//! ([`LEAF_PREFIX`](crate::constants::LEAF_PREFIX) and [`INTERNAL_PREFIX`]),
//! which prevents second preimage attacks where an internal node's
//! concatenated children are presented as if they were leaf data.
//!
//! ## Hashing scheme
//!
//! - **Leaf nodes**: `SHA256(0x00 || leaf_data)` (see [`crate::claim_leaf`])
//! - **Internal nodes**: `SHA256(0x01 || left_hash || right_hash)`
//! - **Child ordering**: fixed by the side recorded in each proof step, not
//!   by lexicographic comparison, so the tree shape is unambiguous and the
//!   builder and verifier cannot disagree about which child came first.

use sha2::{Digest, Sha256};

use crate::constants::{INTERNAL_PREFIX, MAX_PROOF_DEPTH};

/// Which side of the parent pair the recorded sibling occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One step of an inclusion proof: a sibling hash and the side it sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofNode {
    pub sibling: [u8; 32],
    pub side: Side,
}

/// Hash an internal node from its two children, in positional order.
pub fn hash_internal_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([INTERNAL_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Verify an inclusion proof for `leaf_hash` against a committed `root`.
///
/// Folds the proof from the leaf upward, placing the running hash on the
/// side opposite each recorded sibling, and succeeds iff the final hash
/// equals `root`. Wrong proofs are an expected outcome of untrusted input,
/// so every mismatch simply returns `false`.
pub fn verify_inclusion(root: &[u8; 32], leaf_hash: &[u8; 32], proof: &[ProofNode]) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }

    let mut node = *leaf_hash;
    for step in proof {
        node = match step.side {
            Side::Left => hash_internal_pair(&step.sibling, &node),
            Side::Right => hash_internal_pair(&node, &step.sibling),
        };
    }

    node == *root
}
