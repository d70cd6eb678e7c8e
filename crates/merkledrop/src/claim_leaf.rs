use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::constants::LEAF_PREFIX;

/// The data that is hashed to form a leaf in the eligibility merkle tree.
/// Each leaf corresponds to one recipient's allocation.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimLeaf {
    /// The public key of the recipient.
    pub recipient: Pubkey,
    /// The amount of tokens this allocation is worth.
    pub amount: u64,
    /// Position of this entry in the eligibility list. Salts the leaf so
    /// two entries with identical recipient and amount still hash to
    /// distinct leaves.
    pub index: u64,
}

/// Hashes a `ClaimLeaf` to produce a 32-byte merkle leaf.
/// Scheme: `SHA256(0x00 || borsh_serialized_leaf)`. The leaf prefix keeps
/// leaf hashes disjoint from internal node hashes (see [`crate::merkle`]).
pub fn hash_claim_leaf(leaf: &ClaimLeaf) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);

    let serialized = borsh::to_vec(leaf).expect("ClaimLeaf serialization cannot fail");
    hasher.update(&serialized);

    hasher.finalize().into()
}
