//! The claimed-registry: the sole gate against double payout.

use std::collections::HashSet;

use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::constants::CLAIM_KEY_PREFIX;

/// Identity of one allocation in the claimed-registry:
/// `SHA256(0x02 || recipient || amount_le)`.
///
/// Both claim paths share this key space deliberately. A recipient eligible
/// for the same `(recipient, amount)` under the merkle tree and under a
/// signed authorization is paid once total, whichever path lands first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClaimKey([u8; 32]);

impl ClaimKey {
    pub fn for_allocation(recipient: &Pubkey, amount: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update([CLAIM_KEY_PREFIX]);
        hasher.update(recipient.as_ref());
        hasher.update(amount.to_le_bytes());
        ClaimKey(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Result of the atomic check-and-set against the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    Claimed,
    AlreadyClaimed,
}

/// Registry of satisfied claims. Grows monotonically; the only removal is
/// the crate-private [`release`](ClaimLedger::release), which unwinds the
/// single staged mark when a transfer collaborator fails mid-claim.
#[derive(Debug, Default)]
pub struct ClaimLedger {
    claimed: HashSet<ClaimKey>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic check-and-set: inserts `key` and reports `Claimed` if it was
    /// absent, otherwise reports `AlreadyClaimed` without touching state.
    pub fn try_claim(&mut self, key: ClaimKey) -> ClaimStatus {
        if self.claimed.insert(key) {
            ClaimStatus::Claimed
        } else {
            ClaimStatus::AlreadyClaimed
        }
    }

    pub fn is_claimed(&self, key: &ClaimKey) -> bool {
        self.claimed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Unwind a mark staged by `try_claim` in the same claim operation.
    /// Only reachable from the claim-and-pay sequence after a failed
    /// transfer, so the marked-but-unpaid state never survives a call.
    pub(crate) fn release(&mut self, key: &ClaimKey) {
        self.claimed.remove(key);
    }
}
