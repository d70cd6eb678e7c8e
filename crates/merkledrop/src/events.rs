use solana_pubkey::Pubkey;

/// Which verification path authenticated a payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimPath {
    Merkle,
    Signature,
}

/// Observable campaign notifications, recorded in order of occurrence and
/// consumed by external monitors and test harnesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignEvent {
    /// Emitted on every successful payout.
    Claimed {
        recipient: Pubkey,
        amount: u64,
        path: ClaimPath,
    },
    /// Emitted exactly once, at the moment the signature path latches off.
    SignatureClaimsDisabled { by: Pubkey },
    /// Emitted on every ownership handover.
    OwnershipTransferred {
        previous_owner: Pubkey,
        new_owner: Pubkey,
    },
}
