use anchor_lang::prelude::*;

#[error_code]
pub enum NoapError {
    // ========== AUTHORIZATION ==========
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    // ========== LOOKUP ==========
    #[msg("Event or token does not exist")]
    NotFound,

    // ========== EVENT LIFECYCLE ==========
    #[msg("Event is closed")]
    EventClosed,

    #[msg("Event is already closed")]
    AlreadyClosed,

    #[msg("Event minter set is full")]
    MinterLimitReached,

    // ========== MIGRATION ==========
    #[msg("Source token has already been migrated")]
    AlreadyMigrated,

    #[msg("Transfer of the source token into custody failed")]
    ExternalTransferFailed,

    #[msg("Source token is not a single-unit NFT")]
    InvalidSourceToken,

    #[msg("Source metadata does not belong to the source mint")]
    SourceMetadataMismatch,

    #[msg("Migration is not in flight")]
    MigrationNotInFlight,

    // ========== INPUT VALIDATION ==========
    #[msg("Descriptive record must not be empty")]
    InvalidUri,

    #[msg("URI too long")]
    UriTooLong,

    #[msg("Name too long")]
    NameTooLong,

    #[msg("Symbol too long")]
    SymbolTooLong,

    #[msg("Invalid recipient address")]
    InvalidRecipient,

    // ========== ARITHMETIC ==========
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
