use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Recipient address cannot be zero")]
    ZeroAddress,

    #[msg("Basis points must be between 0 and 10000")]
    InvalidBasisPoints,

    #[msg("Client and referrer basis points exceed 10000")]
    SharesExceedTotal,

    #[msg("Client, referrer and service must be distinct")]
    DuplicateRecipient,

    #[msg("Referrer address and share must both be set or both be zero")]
    InvalidReferrer,

    #[msg("Recipient cannot receive lamports")]
    RecipientCannotReceive,

    #[msg("Recipient account does not match configuration")]
    RecipientMismatch,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Fee distributor already initialized")]
    AlreadyInitialized,

    #[msg("Fee distributor not initialized")]
    NotInitialized,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Reference instance not set")]
    ReferenceInstanceNotSet,

    #[msg("Account is not a valid reference instance for this factory")]
    InvalidReferenceInstance,

    #[msg("Native asset cannot be recovered")]
    NativeAssetNotRecoverable,

    #[msg("Invalid Merkle proof")]
    InvalidProof,

    #[msg("Merkle proof is too long")]
    ProofTooLong,

    #[msg("No pending ownership transfer")]
    NoPendingTransfer,

    #[msg("Validator count must be between 1 and 64")]
    InvalidValidatorCount,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,
}

/// Coarse classification of program errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid recipient, share bounds or reference instance
    Configuration,
    /// Caller lacks the required role
    Authorization,
    /// Operation not valid in the current lifecycle state
    State,
    /// Inclusion proof rejected
    Proof,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::Unauthorized | ErrorCode::NoPendingTransfer => ErrorKind::Authorization,

            ErrorCode::AlreadyInitialized
            | ErrorCode::NotInitialized
            | ErrorCode::NothingToWithdraw
            | ErrorCode::MathOverflow
            | ErrorCode::MathUnderflow => ErrorKind::State,

            ErrorCode::InvalidProof | ErrorCode::ProofTooLong => ErrorKind::Proof,

            ErrorCode::ZeroAddress
            | ErrorCode::InvalidBasisPoints
            | ErrorCode::SharesExceedTotal
            | ErrorCode::DuplicateRecipient
            | ErrorCode::InvalidReferrer
            | ErrorCode::RecipientCannotReceive
            | ErrorCode::RecipientMismatch
            | ErrorCode::InsufficientRemainingAccounts
            | ErrorCode::ReferenceInstanceNotSet
            | ErrorCode::InvalidReferenceInstance
            | ErrorCode::NativeAssetNotRecoverable
            | ErrorCode::InvalidValidatorCount
            | ErrorCode::ZeroAmount => ErrorKind::Configuration,
        }
    }
}
