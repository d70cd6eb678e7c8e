//! Claim-verification and anti-replay engine for a one-shot token
//! distribution campaign.
//!
//! Eligibility for the whole campaign is committed up front as a single
//! merkle root; recipients prove membership with a sided inclusion proof.
//! A second, independently disable-able path accepts claims authorized by
//! an ed25519 signature from the campaign's designated signer. Both paths
//! funnel into one claimed-registry so every allocation is paid at most
//! once, and the external token ledger is reached only through the
//! [`TokenTransfer`] capability handed in at construction.

pub mod campaign;
pub mod claim_leaf;
pub mod constants;
pub mod error;
pub mod events;
pub mod ledger;
pub mod merkle;
pub mod signature;
pub mod token;

pub use campaign::{Campaign, ClaimOutcome, ClaimRequest};
pub use claim_leaf::{hash_claim_leaf, ClaimLeaf};
pub use constants::{
    CLAIM_KEY_PREFIX, CLAIM_MESSAGE_TAG, INTERNAL_PREFIX, LEAF_PREFIX, MAX_PROOF_DEPTH,
};
pub use error::{AirdropError, AirdropResult};
pub use events::{CampaignEvent, ClaimPath};
pub use ledger::{ClaimKey, ClaimLedger, ClaimStatus};
pub use merkle::{hash_internal_pair, verify_inclusion, ProofNode, Side};
pub use signature::{claim_message, SignatureAuth};
pub use token::{TokenTransfer, TransferError};
