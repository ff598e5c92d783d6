use anchor_lang::prelude::*;

use crate::constants::MAX_EVENT_MINTERS;
use crate::errors::NoapError;
use crate::utils::validate_uri;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
}

/// Issuance event
/// Binds a descriptive record to the set of addresses allowed to mint under it.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct EventRecord {
    pub event_id: u64,
    /// Address that created the event and became its first minter
    pub creator: Pubkey,
    /// Descriptive record copied into every token minted under the event
    #[max_len(200)] // MAX_URI_LENGTH
    pub uri: String,
    #[max_len(32)] // MAX_EVENT_MINTERS
    pub minters: Vec<Pubkey>,
    pub status: EventStatus,
    pub created_at: i64,
    pub closed_at: Option<i64>,
    /// Bump seed for PDA
    pub bump: u8,
}

impl EventRecord {
    pub fn open(
        &mut self,
        event_id: u64,
        creator: Pubkey,
        uri: String,
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        validate_uri(&uri)?;

        self.event_id = event_id;
        self.creator = creator;
        self.uri = uri;
        self.minters = vec![creator];
        self.status = EventStatus::Open;
        self.created_at = created_at;
        self.closed_at = None;
        self.bump = bump;
        Ok(())
    }

    pub fn is_minter(&self, address: &Pubkey) -> bool {
        self.minters.contains(address)
    }

    pub fn is_open(&self) -> bool {
        self.status == EventStatus::Open
    }

    /// Open with at least one minter left. An open event whose last minter
    /// renounced is not mintable, yet it is not closed either.
    pub fn is_mintable(&self) -> bool {
        self.is_open() && !self.minters.is_empty()
    }

    pub fn ensure_minter(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_minter(caller), NoapError::Unauthorized);
        Ok(())
    }

    pub fn ensure_can_mint(&self, caller: &Pubkey) -> Result<()> {
        self.ensure_minter(caller)?;
        require!(self.is_open(), NoapError::EventClosed);
        Ok(())
    }

    /// Returns `false` when `new_minter` already held the right.
    pub fn add_minter(&mut self, caller: &Pubkey, new_minter: Pubkey) -> Result<bool> {
        self.ensure_minter(caller)?;
        require!(self.is_open(), NoapError::EventClosed);

        if self.is_minter(&new_minter) {
            return Ok(false);
        }
        require!(
            self.minters.len() < MAX_EVENT_MINTERS,
            NoapError::MinterLimitReached
        );
        self.minters.push(new_minter);
        Ok(true)
    }

    pub fn renounce_minter(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_minter(caller)?;
        self.minters.retain(|minter| minter != caller);
        Ok(())
    }

    /// One-way transition to `Closed`
    pub fn end(&mut self, caller: &Pubkey, closed_at: i64) -> Result<()> {
        self.ensure_minter(caller)?;
        require!(self.is_open(), NoapError::AlreadyClosed);

        self.status = EventStatus::Closed;
        self.closed_at = Some(closed_at);
        Ok(())
    }
}
