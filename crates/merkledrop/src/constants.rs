//! Domain separation constants for the campaign's hashing schemes.
//! Off-line tree builders must use the same values bit-for-bit, or their
//! roots and proofs will not verify here.

/// Domain separation prefix for merkle leaf nodes.
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain separation prefix for merkle internal nodes.
pub const INTERNAL_PREFIX: u8 = 0x01;

/// Domain separation prefix for claimed-registry keys.
pub const CLAIM_KEY_PREFIX: u8 = 0x02;

/// Domain tag bound into every signed claim authorization, ahead of the
/// campaign fingerprint. Keeps claim signatures from colliding with any
/// other message the signer's key might produce.
pub const CLAIM_MESSAGE_TAG: &[u8] = b"merkledrop:claim:v1";

/// Sanity bound on inclusion proof length. A depth-64 binary tree already
/// covers more leaves than can exist; anything longer is garbage input.
/// This is a fast-fail bound only, the root equality check is the sole
/// source of truth.
pub const MAX_PROOF_DEPTH: usize = 64;
