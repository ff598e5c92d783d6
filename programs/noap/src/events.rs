use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
}

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub creator: Pubkey,
    pub uri: String,
}

#[event]
pub struct EventMinterAdded {
    pub event_id: u64,
    pub minter: Pubkey,
    pub added_by: Pubkey,
}

#[event]
pub struct EventMinterRenounced {
    pub event_id: u64,
    pub minter: Pubkey,
    /// Minters left after the renouncement; zero leaves the event open but unmintable
    pub remaining_minters: u32,
}

#[event]
pub struct EventEnded {
    pub event_id: u64,
    pub ended_by: Pubkey,
    pub timestamp: i64,
}

/// Issued for tokens minted under an event
#[event]
pub struct TokenMinted {
    pub token_id: u64,
    pub event_id: u64,
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub minter: Pubkey,
    pub uri: String,
}

/// Issued when a foreign token is retired into custody and reminted here
#[event]
pub struct TokenMigrated {
    pub token_id: u64,
    /// Token program owning the source mint
    pub registry: Pubkey,
    /// Source mint address
    pub source_token: Pubkey,
    pub mint: Pubkey,
    pub holder: Pubkey,
    pub uri: String,
}
