use anchor_lang::prelude::*;

use crate::constants::FIRST_ID;
use crate::errors::NoapError;
use crate::utils::{validate_name, validate_symbol};

/// Registry configuration account
/// Holds the identifier counters and the metadata stamped on every issued token.
/// The PDA itself is the mint authority of registry tokens and the custodian of
/// migrated source tokens.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct RegistryConfig {
    /// Deployer that initialized the registry
    pub authority: Pubkey,
    /// Name written into token metadata
    #[max_len(32)] // MAX_NAME_LENGTH
    pub name: String,
    /// Symbol written into token metadata
    #[max_len(10)] // MAX_SYMBOL_LENGTH
    pub symbol: String,
    /// Identifier the next created event receives
    pub next_event_id: u64,
    /// Identifier the next issued token receives
    pub next_token_id: u64,
    /// Number of completed burn-and-remint migrations
    pub total_migrated: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl RegistryConfig {
    pub fn init(&mut self, authority: Pubkey, name: String, symbol: String, bump: u8) -> Result<()> {
        validate_name(&name)?;
        validate_symbol(&symbol)?;

        self.authority = authority;
        self.name = name;
        self.symbol = symbol;
        self.next_event_id = FIRST_ID;
        self.next_token_id = FIRST_ID;
        self.total_migrated = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn allocate_event_id(&mut self) -> Result<u64> {
        let event_id = self.next_event_id;
        self.next_event_id = event_id
            .checked_add(1)
            .ok_or(error!(NoapError::ArithmeticOverflow))?;
        Ok(event_id)
    }

    pub fn allocate_token_id(&mut self) -> Result<u64> {
        let token_id = self.next_token_id;
        self.next_token_id = token_id
            .checked_add(1)
            .ok_or(error!(NoapError::ArithmeticOverflow))?;
        Ok(token_id)
    }

    /// Most recently allocated event id, `NotFound` before the first event
    pub fn last_event_id(&self) -> Result<u64> {
        require!(self.next_event_id > FIRST_ID, NoapError::NotFound);
        Ok(self.next_event_id - 1)
    }

    /// Most recently allocated token id, `NotFound` before the first token
    pub fn last_token_id(&self) -> Result<u64> {
        require!(self.next_token_id > FIRST_ID, NoapError::NotFound);
        Ok(self.next_token_id - 1)
    }

    pub fn record_migration(&mut self) -> Result<()> {
        self.total_migrated = self
            .total_migrated
            .checked_add(1)
            .ok_or(error!(NoapError::ArithmeticOverflow))?;
        Ok(())
    }
}
