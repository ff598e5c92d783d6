use anchor_lang::prelude::*;

use crate::errors::NoapError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum MigrationStatus {
    /// Freshly allocated record, never claimed
    #[default]
    Unclaimed,
    /// Claimed; source transfer into custody has been requested
    InFlight,
    /// Source retired and the replacement token minted
    Completed,
}

/// Exactly-once guard for one (source registry, source token) pair.
///
/// A claim moves the record to `InFlight` before the source registry is called,
/// so any re-entrant attempt on the same pair sees it as consumed.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct MigrationRecord {
    /// Token program that owns the source mint
    pub registry: Pubkey,
    /// Source mint address
    pub source_token: Pubkey,
    pub status: MigrationStatus,
    /// Registry token minted in exchange, valid once `Completed`
    pub token_id: u64,
    pub migrated_by: Pubkey,
    pub migrated_at: i64,
    pub bump: u8,
}

impl MigrationRecord {
    pub fn is_consumed(&self) -> bool {
        self.status != MigrationStatus::Unclaimed
    }

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.is_consumed(), NoapError::AlreadyMigrated);
        Ok(())
    }

    pub fn begin(
        &mut self,
        registry: Pubkey,
        source_token: Pubkey,
        caller: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        self.ensure_unclaimed()?;

        self.registry = registry;
        self.source_token = source_token;
        self.status = MigrationStatus::InFlight;
        self.migrated_by = caller;
        self.migrated_at = now;
        self.bump = bump;
        Ok(())
    }

    /// Claim the pair and write the claim through to account data at once.
    /// Anchor only serializes accounts when the instruction returns, and a
    /// nested invocation during the source transfer must already read
    /// `InFlight`.
    pub fn claim<'info>(
        record: &mut Account<'info, MigrationRecord>,
        registry: Pubkey,
        source_token: Pubkey,
        caller: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        record.begin(registry, source_token, caller, now, bump)?;
        record.exit(&crate::ID)
    }

    pub fn complete(&mut self, token_id: u64) -> Result<()> {
        require!(
            self.status == MigrationStatus::InFlight,
            NoapError::MigrationNotInFlight
        );
        self.token_id = token_id;
        self.status = MigrationStatus::Completed;
        Ok(())
    }

    pub fn resulting_token_id(&self) -> Option<u64> {
        match self.status {
            MigrationStatus::Completed => Some(self.token_id),
            _ => None,
        }
    }
}
