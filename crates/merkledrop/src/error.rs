use thiserror::Error;

use crate::token::TransferError;

pub type AirdropResult<T> = Result<T, AirdropError>;

/// Failure conditions surfaced by campaign operations.
///
/// A repeated claim is not in this enum: resubmitting a satisfied claim is
/// safe and reports [`ClaimOutcome::AlreadyClaimed`](crate::ClaimOutcome)
/// through the `Ok` channel instead of being punished as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AirdropError {
    #[error("caller is not the campaign owner")]
    NotOwner,

    #[error("merkle proof does not verify against the committed root")]
    InvalidProof,

    #[error("signature does not verify against the designated signer")]
    InvalidSignature,

    #[error("signature claims have been permanently disabled for this campaign")]
    SignatureDisabled,

    #[error("malformed claim: zero amount or invalid recipient")]
    InvalidClaim,

    #[error(transparent)]
    TransferFailed(#[from] TransferError),
}
