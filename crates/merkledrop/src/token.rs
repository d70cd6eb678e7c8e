use solana_pubkey::Pubkey;
use thiserror::Error;

/// Failure reported by the token collaborator. The campaign never inspects
/// the collaborator's balance logic; it only needs to know the transfer
/// did not happen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("token transfer failed: {0}")]
pub struct TransferError(pub String);

/// Capability handle to the external fungible-token ledger, supplied at
/// campaign construction. The implementation is untrusted; the claim
/// sequence orders its single state mutation before this call and unwinds
/// it if the call fails.
pub trait TokenTransfer {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), TransferError>;
}
