//! Signature-path claim authorization.
//!
//! The designated signer authorizes individual allocations off-line by
//! signing a canonical message binding `(recipient, amount)` to this
//! campaign's fingerprint. The whole path can be permanently disabled by
//! the owner; the latch has exactly two states and one legal transition.

use solana_pubkey::Pubkey;
use solana_signature::Signature;

use crate::constants::CLAIM_MESSAGE_TAG;

/// Canonical byte encoding of a signed claim authorization:
/// `TAG || campaign_fingerprint || recipient || amount_le`.
///
/// The fingerprint binds the signature to one campaign instance, so an
/// authorization captured from one campaign cannot be replayed against
/// another sharing the same signer key.
pub fn claim_message(fingerprint: &[u8; 32], recipient: &Pubkey, amount: u64) -> Vec<u8> {
    let mut message = Vec::with_capacity(CLAIM_MESSAGE_TAG.len() + 32 + 32 + 8);
    message.extend_from_slice(CLAIM_MESSAGE_TAG);
    message.extend_from_slice(fingerprint);
    message.extend_from_slice(recipient.as_ref());
    message.extend_from_slice(&amount.to_le_bytes());
    message
}

/// The signature path's state: the designated signer and the one-way
/// enable latch.
#[derive(Clone, Debug)]
pub struct SignatureAuth {
    signer: Pubkey,
    enabled: bool,
}

impl SignatureAuth {
    pub fn new(signer: Pubkey) -> Self {
        Self {
            signer,
            enabled: true,
        }
    }

    pub fn signer(&self) -> Pubkey {
        self.signer
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// One-way latch. Returns `true` only on the enabled -> disabled
    /// transition; every later call is a no-op returning `false`. Nothing
    /// in the public surface can set the latch back.
    pub(crate) fn disable(&mut self) -> bool {
        let transitioned = self.enabled;
        self.enabled = false;
        transitioned
    }

    /// True iff the path is enabled and `signature` is the designated
    /// signer's ed25519 signature over the canonical claim message.
    /// After `disable`, fails unconditionally for every input.
    pub fn verify(
        &self,
        fingerprint: &[u8; 32],
        recipient: &Pubkey,
        amount: u64,
        signature: &Signature,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        let message = claim_message(fingerprint, recipient, amount);
        signature.verify(self.signer.as_ref(), &message)
    }
}
