use anchor_lang::prelude::*;

/// Custom error codes for the escrow ledger program.
#[error_code]
pub enum EscrowError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: issuer signature required")]
    UnauthorizedIssuer,

    #[msg("Unauthorized: debt oracle signature required")]
    UnauthorizedOracle,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Duration must be greater than zero and within the system cap")]
    InvalidDuration,

    #[msg("Amount must exceed duration or the per-second rate truncates to zero")]
    GrantTooSmall,

    #[msg("End time must be in the future")]
    InvalidEndTime,

    #[msg("Insufficient un-escrowed balance in custody")]
    InsufficientUnescrowedBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Account entry list is full")]
    EntryListFull,

    #[msg("Supplied entry account does not match the expected address")]
    EntryAccountMismatch,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Setup is already complete")]
    SetupAlreadyComplete,

    #[msg("Import is not allowed after setup is complete")]
    ImportAfterSetup,

    #[msg("Account merging window is not open")]
    MergingNotOpen,

    #[msg("Account merging window is already open")]
    MergingWindowOpen,

    #[msg("Account merging duration exceeds the maximum")]
    MergingDurationTooLong,

    #[msg("Cannot nominate own account")]
    CannotNominateSelf,

    #[msg("Account has no escrowed balance")]
    NoEscrowEntries,

    #[msg("Caller is not the nominated receiver for this account")]
    NominatedReceiverMismatch,

    #[msg("Account debt balance must be zero")]
    NonZeroDebt,

    #[msg("Math overflow")]
    MathOverflow,
}
