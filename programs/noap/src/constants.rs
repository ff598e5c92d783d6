// ========== METADATA LIMITS ==========
/// Maximum length for a descriptive record (Metaplex URI limit)
pub const MAX_URI_LENGTH: usize = 200;

/// Maximum length for the registry name stamped into token metadata
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for the registry symbol
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Upper bound on the minter set of a single event
pub const MAX_EVENT_MINTERS: usize = 32;

// ========== PDA SEEDS ==========
/// Seed for the registry configuration PDA (also mint authority and custodian)
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for event PDAs, followed by the little-endian event id
pub const EVENT_SEED: &[u8] = b"event";

/// Seed for token record PDAs, followed by the little-endian token id
pub const TOKEN_SEED: &[u8] = b"token";

/// Seed for migration record PDAs, followed by source token program and source mint
pub const MIGRATION_SEED: &[u8] = b"migration";

/// Metaplex metadata seed
pub const METADATA_SEED: &[u8] = b"metadata";

/// Metaplex master edition seed
pub const MASTER_EDITION_SEED: &[u8] = b"edition";

// ========== TOKEN SHAPE ==========
pub const NFT_DECIMALS: u8 = 0;
pub const NFT_SUPPLY: u64 = 1;

/// First identifier handed out for both events and tokens
pub const FIRST_ID: u64 = 1;
