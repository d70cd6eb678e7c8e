//! Off-line merkle tree construction and proof generation for merkledrop
//! campaigns.
//!
//! The engine crate only verifies; this is the tooling side that turns an
//! eligibility list into the committed root and per-recipient sided
//! proofs. Builder and verifier share the hashing scheme through the
//! engine's exports, so trees built here verify there bit-for-bit.

pub mod builder;

pub use builder::{ClaimTree, TreeError};

// Re-export the leaf and proof types so tooling needs a single import.
pub use merkledrop::{hash_claim_leaf, ClaimLeaf, ProofNode, Side};
