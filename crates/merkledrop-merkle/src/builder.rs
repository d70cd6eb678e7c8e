use std::collections::HashMap;

use merkledrop::{hash_claim_leaf, hash_internal_pair, verify_inclusion, ClaimLeaf, ProofNode, Side};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot build a tree with no leaves")]
    EmptyTree,

    #[error("duplicate leaf at positions {0} and {1}")]
    DuplicateLeaf(usize, usize),

    #[error("leaf not found in this tree")]
    LeafNotFound,

    #[error("leaf position {0} out of bounds for {1} leaves")]
    PositionOutOfBounds(usize, usize),
}

/// Binary merkle tree over claim leaves, kept level by level so sided
/// inclusion proofs can be read straight out of the structure.
///
/// An odd node at the end of a level is promoted unchanged to the next
/// level; the promoted node contributes no proof step at that level, which
/// matches the verifier folding only the recorded siblings.
pub struct ClaimTree {
    leaves: Vec<ClaimLeaf>,
    /// `levels[0]` holds the leaf hashes; the last level holds the root.
    levels: Vec<Vec<[u8; 32]>>,
}

impl ClaimTree {
    /// Build the tree over `leaves` in list order. Rejects empty input and
    /// leaves that hash identically (an eligibility list must salt
    /// otherwise-identical entries with distinct indices).
    pub fn from_leaves(leaves: Vec<ClaimLeaf>) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let leaf_hashes: Vec<[u8; 32]> = leaves.iter().map(hash_claim_leaf).collect();

        let mut seen: HashMap<[u8; 32], usize> = HashMap::with_capacity(leaf_hashes.len());
        for (position, hash) in leaf_hashes.iter().enumerate() {
            if let Some(first) = seen.insert(*hash, position) {
                return Err(TreeError::DuplicateLeaf(first, position));
            }
        }

        let mut levels = vec![leaf_hashes];
        while levels.last().expect("levels never empty").len() > 1 {
            let current = levels.last().expect("levels never empty");
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_internal_pair(left, right)),
                    [odd] => next.push(*odd),
                    _ => unreachable!("chunks(2) yields one or two hashes"),
                }
            }
            levels.push(next);
        }

        Ok(Self { leaves, levels })
    }

    /// The committed root for this eligibility list.
    pub fn root(&self) -> [u8; 32] {
        // from_leaves guarantees a final single-hash level.
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaves(&self) -> &[ClaimLeaf] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Sided inclusion proof for the leaf at list position `position`.
    pub fn proof_for_position(&self, position: usize) -> Result<Vec<ProofNode>, TreeError> {
        if position >= self.leaves.len() {
            return Err(TreeError::PositionOutOfBounds(position, self.leaves.len()));
        }

        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        let mut cursor = position;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_position = cursor ^ 1;
            if sibling_position < level.len() {
                let side = if sibling_position < cursor {
                    Side::Left
                } else {
                    Side::Right
                };
                proof.push(ProofNode {
                    sibling: level[sibling_position],
                    side,
                });
            }
            // No sibling: this node was promoted unchanged, nothing to record.
            cursor /= 2;
        }
        Ok(proof)
    }

    /// Sided inclusion proof for a specific leaf.
    pub fn proof_for_leaf(&self, leaf: &ClaimLeaf) -> Result<Vec<ProofNode>, TreeError> {
        let position = self
            .leaves
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(TreeError::LeafNotFound)?;
        self.proof_for_position(position)
    }

    /// Convenience check that a proof generated here verifies against this
    /// tree's root.
    pub fn verify(&self, leaf: &ClaimLeaf, proof: &[ProofNode]) -> bool {
        verify_inclusion(&self.root(), &hash_claim_leaf(leaf), proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use solana_pubkey::Pubkey;

    fn test_leaves(count: usize) -> Vec<ClaimLeaf> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|index| ClaimLeaf {
                recipient: Pubkey::new_unique(),
                amount: rng.gen_range(1..=1_000_000),
                index: index as u64,
            })
            .collect()
    }

    #[test]
    fn test_every_leaf_provable_at_every_size() {
        // Sizes 1 through 9 cover single-leaf trees, perfect trees, and
        // every odd-promotion layout up to three levels.
        for size in 1..=9 {
            let tree = ClaimTree::from_leaves(test_leaves(size)).unwrap();
            for leaf in tree.leaves().to_vec() {
                let proof = tree.proof_for_leaf(&leaf).unwrap();
                assert!(
                    tree.verify(&leaf, &proof),
                    "proof for leaf {} of {} leaves should verify",
                    leaf.index,
                    size
                );
            }
        }
    }

    #[test]
    fn test_single_leaf_tree_has_empty_proof() {
        let tree = ClaimTree::from_leaves(test_leaves(1)).unwrap();
        let proof = tree.proof_for_position(0).unwrap();
        assert!(proof.is_empty());
        assert_eq!(tree.root(), hash_claim_leaf(&tree.leaves()[0]));
    }

    #[test]
    fn test_root_is_deterministic() {
        let leaves = test_leaves(7);
        let first = ClaimTree::from_leaves(leaves.clone()).unwrap();
        let second = ClaimTree::from_leaves(leaves).unwrap();
        assert_eq!(first.root(), second.root());
    }

    #[test]
    fn test_proof_does_not_verify_for_other_leaf() {
        let tree = ClaimTree::from_leaves(test_leaves(4)).unwrap();
        let proof = tree.proof_for_position(0).unwrap();
        let other = tree.leaves()[1];
        assert!(!tree.verify(&other, &proof));
    }

    #[test]
    fn test_identical_allocations_salted_by_index() {
        let recipient = Pubkey::new_unique();
        let leaves = vec![
            ClaimLeaf {
                recipient,
                amount: 100,
                index: 0,
            },
            ClaimLeaf {
                recipient,
                amount: 100,
                index: 1,
            },
        ];
        let tree = ClaimTree::from_leaves(leaves).unwrap();
        for leaf in tree.leaves().to_vec() {
            let proof = tree.proof_for_leaf(&leaf).unwrap();
            assert!(tree.verify(&leaf, &proof));
        }
    }

    #[test]
    fn test_duplicate_leaf_rejected() {
        let mut leaves = test_leaves(3);
        leaves.push(leaves[1]);
        assert_eq!(
            ClaimTree::from_leaves(leaves).err(),
            Some(TreeError::DuplicateLeaf(1, 3))
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            ClaimTree::from_leaves(Vec::new()).err(),
            Some(TreeError::EmptyTree)
        );
    }

    #[test]
    fn test_unknown_leaf_and_position_errors() {
        let tree = ClaimTree::from_leaves(test_leaves(3)).unwrap();

        let stranger = ClaimLeaf {
            recipient: Pubkey::new_unique(),
            amount: 999,
            index: 42,
        };
        assert_eq!(tree.proof_for_leaf(&stranger), Err(TreeError::LeafNotFound));
        assert_eq!(
            tree.proof_for_position(3),
            Err(TreeError::PositionOutOfBounds(3, 3))
        );
    }
}
