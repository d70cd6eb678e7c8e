//! The campaign orchestrator: receives claim requests, dispatches to the
//! merkle or signature path, consults the claimed-registry, and invokes
//! the token collaborator.
//!
//! Every mutating operation takes `&mut self`, so the borrow checker
//! enforces the one-operation-at-a-time execution model: the token
//! collaborator cannot re-enter the campaign mid-claim because the
//! campaign is uniquely borrowed for the duration of the call.

use solana_pubkey::Pubkey;
use solana_signature::Signature;
use tracing::{debug, info};

use crate::claim_leaf::{hash_claim_leaf, ClaimLeaf};
use crate::error::{AirdropError, AirdropResult};
use crate::events::{CampaignEvent, ClaimPath};
use crate::ledger::{ClaimKey, ClaimLedger, ClaimStatus};
use crate::merkle::{verify_inclusion, ProofNode};
use crate::signature::SignatureAuth;
use crate::token::TokenTransfer;

/// Outcome of a claim operation. `AlreadyClaimed` is terminal but
/// success-adjacent: the allocation was paid at some point, and repeating
/// the call moves no tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Paid,
    AlreadyClaimed,
}

/// A claim request, resolved to its verification path once at entry.
#[derive(Clone, Debug)]
pub enum ClaimRequest {
    Merkle {
        recipient: Pubkey,
        amount: u64,
        index: u64,
        proof: Vec<ProofNode>,
    },
    Signature {
        recipient: Pubkey,
        amount: u64,
        signature: Signature,
    },
}

/// State machine for a single distribution campaign.
///
/// The merkle root, campaign fingerprint, designated signer, and token
/// collaborator are fixed at construction; the owner and the signature
/// latch mutate only through the owner-gated admin operations.
pub struct Campaign<T: TokenTransfer> {
    root: [u8; 32],
    fingerprint: [u8; 32],
    owner: Pubkey,
    signature_auth: SignatureAuth,
    ledger: ClaimLedger,
    token: T,
    events: Vec<CampaignEvent>,
}

impl<T: TokenTransfer> Campaign<T> {
    /// Create a campaign whose designated signer is the owner.
    pub fn new(root: [u8; 32], fingerprint: [u8; 32], owner: Pubkey, token: T) -> Self {
        Self::with_designated_signer(root, fingerprint, owner, owner, token)
    }

    /// Create a campaign with a signer key separate from the owner. The
    /// signer is fixed configuration; later ownership transfers do not
    /// retarget it.
    pub fn with_designated_signer(
        root: [u8; 32],
        fingerprint: [u8; 32],
        owner: Pubkey,
        designated_signer: Pubkey,
        token: T,
    ) -> Self {
        info!(
            root = %hex::encode(root),
            fingerprint = %hex::encode(fingerprint),
            %owner,
            %designated_signer,
            "campaign created"
        );
        Self {
            root,
            fingerprint,
            owner,
            signature_auth: SignatureAuth::new(designated_signer),
            ledger: ClaimLedger::new(),
            token,
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    pub fn fingerprint(&self) -> [u8; 32] {
        self.fingerprint
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn designated_signer(&self) -> Pubkey {
        self.signature_auth.signer()
    }

    pub fn signature_claims_enabled(&self) -> bool {
        self.signature_auth.is_enabled()
    }

    /// Number of allocations paid out so far.
    pub fn claims_paid(&self) -> usize {
        self.ledger.len()
    }

    /// Whether the allocation for `(recipient, amount)` has been paid,
    /// through either path.
    pub fn is_claimed(&self, recipient: &Pubkey, amount: u64) -> bool {
        self.ledger
            .is_claimed(&ClaimKey::for_allocation(recipient, amount))
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    /// Notifications recorded so far, oldest first.
    pub fn events(&self) -> &[CampaignEvent] {
        &self.events
    }

    /// Drain the recorded notifications, handing them to the caller.
    pub fn take_events(&mut self) -> Vec<CampaignEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dispatch a claim request to its verification path.
    pub fn claim(&mut self, request: ClaimRequest) -> AirdropResult<ClaimOutcome> {
        match request {
            ClaimRequest::Merkle {
                recipient,
                amount,
                index,
                proof,
            } => self.claim_by_proof(recipient, amount, index, &proof),
            ClaimRequest::Signature {
                recipient,
                amount,
                signature,
            } => self.claim_by_signature(recipient, amount, &signature),
        }
    }

    /// Claim an allocation committed in the merkle tree.
    pub fn claim_by_proof(
        &mut self,
        recipient: Pubkey,
        amount: u64,
        index: u64,
        proof: &[ProofNode],
    ) -> AirdropResult<ClaimOutcome> {
        validate_claim_shape(&recipient, amount)?;

        let leaf = ClaimLeaf {
            recipient,
            amount,
            index,
        };
        if !verify_inclusion(&self.root, &hash_claim_leaf(&leaf), proof) {
            debug!(%recipient, amount, index, "merkle claim rejected: proof does not reach the committed root");
            return Err(AirdropError::InvalidProof);
        }

        self.settle(recipient, amount, ClaimPath::Merkle)
    }

    /// Claim an allocation authorized by the designated signer.
    ///
    /// The latch is checked before the signature so callers get an
    /// unambiguous `SignatureDisabled` once the path is dead, regardless
    /// of whether their signature would have verified.
    pub fn claim_by_signature(
        &mut self,
        recipient: Pubkey,
        amount: u64,
        signature: &Signature,
    ) -> AirdropResult<ClaimOutcome> {
        validate_claim_shape(&recipient, amount)?;

        if !self.signature_auth.is_enabled() {
            return Err(AirdropError::SignatureDisabled);
        }
        if !self
            .signature_auth
            .verify(&self.fingerprint, &recipient, amount, signature)
        {
            debug!(%recipient, amount, "signature claim rejected: does not verify against designated signer");
            return Err(AirdropError::InvalidSignature);
        }

        self.settle(recipient, amount, ClaimPath::Signature)
    }

    /// Shared claim-and-pay sequence. Ordering is checks, then the single
    /// registry mutation, then the external transfer; a failed transfer
    /// unwinds the mutation so marked-but-unpaid state never escapes.
    fn settle(
        &mut self,
        recipient: Pubkey,
        amount: u64,
        path: ClaimPath,
    ) -> AirdropResult<ClaimOutcome> {
        let key = ClaimKey::for_allocation(&recipient, amount);
        if self.ledger.try_claim(key) == ClaimStatus::AlreadyClaimed {
            debug!(%recipient, amount, "allocation already claimed");
            return Ok(ClaimOutcome::AlreadyClaimed);
        }

        if let Err(err) = self.token.transfer(&recipient, amount) {
            self.ledger.release(&key);
            debug!(%recipient, amount, %err, "transfer failed, claim unwound");
            return Err(AirdropError::TransferFailed(err));
        }

        info!(%recipient, amount, ?path, "claim paid");
        self.events.push(CampaignEvent::Claimed {
            recipient,
            amount,
            path,
        });
        Ok(ClaimOutcome::Paid)
    }

    fn require_owner(&self, caller: &Pubkey) -> AirdropResult<()> {
        if *caller != self.owner {
            return Err(AirdropError::NotOwner);
        }
        Ok(())
    }

    /// Permanently disable the signature claim path. Idempotent: repeat
    /// calls by the owner succeed without effect and emit nothing.
    pub fn disable_signature_claims(&mut self, caller: Pubkey) -> AirdropResult<()> {
        self.require_owner(&caller)?;

        if self.signature_auth.disable() {
            info!(by = %caller, "signature claims permanently disabled");
            self.events
                .push(CampaignEvent::SignatureClaimsDisabled { by: caller });
        }
        Ok(())
    }

    /// Hand campaign ownership to `new_owner`.
    pub fn transfer_ownership(&mut self, caller: Pubkey, new_owner: Pubkey) -> AirdropResult<()> {
        self.require_owner(&caller)?;

        let previous_owner = std::mem::replace(&mut self.owner, new_owner);
        info!(%previous_owner, %new_owner, "campaign ownership transferred");
        self.events.push(CampaignEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }
}

fn validate_claim_shape(recipient: &Pubkey, amount: u64) -> AirdropResult<()> {
    if amount == 0 || *recipient == Pubkey::default() {
        return Err(AirdropError::InvalidClaim);
    }
    Ok(())
}
