use anchor_lang::prelude::*;

declare_id!("BpVwWuS7dRProiEh8mUb6kTGw28DhsggiCFreWHuxeX");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod noap {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, name: String, symbol: String) -> Result<()> {
        instructions::initialize(ctx, name, symbol)
    }

    pub fn create_event(ctx: Context<CreateEvent>, uri: String) -> Result<u64> {
        instructions::create_event(ctx, uri)
    }

    pub fn mint(ctx: Context<MintToken>, event_id: u64) -> Result<u64> {
        instructions::mint(ctx, event_id)
    }

    pub fn add_event_minter(
        ctx: Context<AddEventMinter>,
        event_id: u64,
        new_minter: Pubkey,
    ) -> Result<()> {
        instructions::add_event_minter(ctx, event_id, new_minter)
    }

    pub fn renounce_event_minter(ctx: Context<RenounceEventMinter>, event_id: u64) -> Result<()> {
        instructions::renounce_event_minter(ctx, event_id)
    }

    pub fn end_event(ctx: Context<EndEvent>, event_id: u64) -> Result<()> {
        instructions::end_event(ctx, event_id)
    }

    pub fn burn_and_remint(ctx: Context<BurnAndRemint>) -> Result<u64> {
        instructions::burn_and_remint(ctx)
    }

    pub fn get_last_event_id(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::get_last_event_id(ctx)
    }

    pub fn get_last_token_id(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::get_last_token_id(ctx)
    }

    pub fn event_uri(ctx: Context<ReadEvent>, event_id: u64) -> Result<String> {
        instructions::event_uri(ctx, event_id)
    }

    pub fn is_event_minter(ctx: Context<ReadEvent>, event_id: u64, address: Pubkey) -> Result<bool> {
        instructions::is_event_minter(ctx, event_id, address)
    }

    pub fn is_event_mintable(ctx: Context<ReadEvent>, event_id: u64) -> Result<bool> {
        instructions::is_event_mintable(ctx, event_id)
    }

    pub fn token_uri(ctx: Context<ReadToken>, token_id: u64) -> Result<String> {
        instructions::token_uri(ctx, token_id)
    }

    pub fn token_event(ctx: Context<ReadToken>, token_id: u64) -> Result<Option<u64>> {
        instructions::token_event(ctx, token_id)
    }

    pub fn owner_of(ctx: Context<ReadTokenOwner>, token_id: u64) -> Result<Pubkey> {
        instructions::owner_of(ctx, token_id)
    }

    pub fn migrated_token_id(
        ctx: Context<ReadMigration>,
        registry: Pubkey,
        source_token: Pubkey,
    ) -> Result<Option<u64>> {
        instructions::migrated_token_id(ctx, registry, source_token)
    }
}
