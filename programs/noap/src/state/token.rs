use anchor_lang::prelude::*;

/// Where a registry token's descriptive record came from
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum TokenSource {
    /// Minted by an event minter
    Event { event_id: u64 },
    /// Reminted from a token retired out of another registry
    Migration {
        registry: Pubkey,
        source_token: Pubkey,
    },
}

/// Issuance ledger entry for one registry token.
/// The current holder lives in the SPL token account of `mint`; this record keeps
/// what was bound at mint time.
#[account]
#[derive(InitSpace, Debug)]
pub struct TokenRecord {
    pub token_id: u64,
    pub mint: Pubkey,
    pub source: TokenSource,
    #[max_len(200)] // MAX_URI_LENGTH
    pub uri: String,
    /// Recipient at mint time
    pub original_owner: Pubkey,
    pub minted_at: i64,
    pub bump: u8,
}

impl TokenRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn bind(
        &mut self,
        token_id: u64,
        mint: Pubkey,
        source: TokenSource,
        uri: String,
        owner: Pubkey,
        minted_at: i64,
        bump: u8,
    ) {
        self.token_id = token_id;
        self.mint = mint;
        self.source = source;
        self.uri = uri;
        self.original_owner = owner;
        self.minted_at = minted_at;
        self.bump = bump;
    }

    pub fn event_id(&self) -> Option<u64> {
        match self.source {
            TokenSource::Event { event_id } => Some(event_id),
            TokenSource::Migration { .. } => None,
        }
    }
}
