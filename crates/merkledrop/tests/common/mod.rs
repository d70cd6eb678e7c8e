#![allow(dead_code)]

use merkledrop::{claim_message, Campaign, ClaimLeaf, TokenTransfer, TransferError};
use merkledrop_merkle::ClaimTree;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;

pub const TEST_FINGERPRINT: [u8; 32] = [7u8; 32];

/// In-memory stand-in for the external token ledger. Records every
/// successful transfer and can be armed to fail the next one.
#[derive(Default)]
pub struct MockToken {
    pub transfers: Vec<(Pubkey, u64)>,
    pub fail_next: bool,
}

impl TokenTransfer for MockToken {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), TransferError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(TransferError("vault is out of funds".to_string()));
        }
        self.transfers.push((*recipient, amount));
        Ok(())
    }
}

impl MockToken {
    pub fn total_paid_to(&self, recipient: &Pubkey) -> u64 {
        self.transfers
            .iter()
            .filter(|(to, _)| to == recipient)
            .map(|(_, amount)| amount)
            .sum()
    }
}

pub struct CampaignFixture {
    pub owner: Keypair,
    pub tree: ClaimTree,
    pub campaign: Campaign<MockToken>,
}

/// Build a campaign over the given `(recipient, amount)` eligibility list,
/// with list position as the leaf index and the owner as designated signer.
pub fn campaign_over(allocations: &[(Pubkey, u64)]) -> CampaignFixture {
    let owner = Keypair::new();
    let leaves: Vec<ClaimLeaf> = allocations
        .iter()
        .enumerate()
        .map(|(index, (recipient, amount))| ClaimLeaf {
            recipient: *recipient,
            amount: *amount,
            index: index as u64,
        })
        .collect();
    let tree = ClaimTree::from_leaves(leaves).expect("test eligibility list is well formed");
    let campaign = Campaign::new(
        tree.root(),
        TEST_FINGERPRINT,
        owner.pubkey(),
        MockToken::default(),
    );
    CampaignFixture {
        owner,
        tree,
        campaign,
    }
}

/// Sign a claim authorization the way the off-line signer would.
pub fn sign_claim(
    signer: &Keypair,
    fingerprint: &[u8; 32],
    recipient: &Pubkey,
    amount: u64,
) -> Signature {
    signer.sign_message(&claim_message(fingerprint, recipient, amount))
}
