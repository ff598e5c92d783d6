use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::NoapError, state::*, utils::load_registry_account};

// Read-only instructions. Results travel back as return data, so clients read
// them by simulating the transaction.

pub fn get_last_event_id(ctx: Context<ReadRegistry>) -> Result<u64> {
    ctx.accounts.config.last_event_id()
}

pub fn get_last_token_id(ctx: Context<ReadRegistry>) -> Result<u64> {
    ctx.accounts.config.last_token_id()
}

pub fn event_uri(ctx: Context<ReadEvent>, _event_id: u64) -> Result<String> {
    let event = load_registry_account::<EventRecord>(&ctx.accounts.event.to_account_info())?;
    Ok(event.uri)
}

/// `false` for events that were never created.
pub fn is_event_minter(ctx: Context<ReadEvent>, _event_id: u64, address: Pubkey) -> Result<bool> {
    let info = ctx.accounts.event.to_account_info();
    if info.data_is_empty() {
        return Ok(false);
    }
    let event = load_registry_account::<EventRecord>(&info)?;
    Ok(event.is_minter(&address))
}

/// Open with at least one minter left. An open event whose last minter
/// renounced reports `false` here while its record still reads `Open`.
pub fn is_event_mintable(ctx: Context<ReadEvent>, _event_id: u64) -> Result<bool> {
    let info = ctx.accounts.event.to_account_info();
    if info.data_is_empty() {
        return Ok(false);
    }
    let event = load_registry_account::<EventRecord>(&info)?;
    Ok(event.is_mintable())
}

pub fn token_uri(ctx: Context<ReadToken>, _token_id: u64) -> Result<String> {
    let record = load_registry_account::<TokenRecord>(&ctx.accounts.token_record.to_account_info())?;
    Ok(record.uri)
}

/// Event a token was minted under; `None` for migrated tokens.
pub fn token_event(ctx: Context<ReadToken>, _token_id: u64) -> Result<Option<u64>> {
    let record = load_registry_account::<TokenRecord>(&ctx.accounts.token_record.to_account_info())?;
    Ok(record.event_id())
}

/// Current holder, as recorded by the token account that holds the unit.
pub fn owner_of(ctx: Context<ReadTokenOwner>, _token_id: u64) -> Result<Pubkey> {
    let record = load_registry_account::<TokenRecord>(&ctx.accounts.token_record.to_account_info())?;
    let holding = &ctx.accounts.holder_token_account;

    require_keys_eq!(holding.mint, record.mint, NoapError::NotFound);
    require!(holding.amount == NFT_SUPPLY, NoapError::NotFound);

    Ok(holding.owner)
}

/// Registry token issued for a source token, if its migration completed.
pub fn migrated_token_id(
    ctx: Context<ReadMigration>,
    _registry: Pubkey,
    _source_token: Pubkey,
) -> Result<Option<u64>> {
    let info = ctx.accounts.migration.to_account_info();
    if info.data_is_empty() {
        return Ok(None);
    }
    let record = load_registry_account::<MigrationRecord>(&info)?;
    Ok(record.resulting_token_id())
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct ReadEvent<'info> {
    /// CHECK: address pinned by seeds; may not exist
    #[account(
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct ReadToken<'info> {
    /// CHECK: address pinned by seeds; may not exist
    #[account(
        seeds = [TOKEN_SEED, token_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub token_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct ReadTokenOwner<'info> {
    /// CHECK: address pinned by seeds; may not exist
    #[account(
        seeds = [TOKEN_SEED, token_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub token_record: UncheckedAccount<'info>,

    pub holder_token_account: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
#[instruction(registry: Pubkey, source_token: Pubkey)]
pub struct ReadMigration<'info> {
    /// CHECK: address pinned by seeds; may not exist
    #[account(
        seeds = [MIGRATION_SEED, registry.as_ref(), source_token.as_ref()],
        bump,
    )]
    pub migration: UncheckedAccount<'info>,
}
