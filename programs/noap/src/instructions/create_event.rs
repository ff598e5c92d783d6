use anchor_lang::prelude::*;

use crate::{constants::*, events::EventCreated, state::*};

/// Open a new event. Anyone may call; the caller becomes its only minter.
pub fn create_event(ctx: Context<CreateEvent>, uri: String) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let now = Clock::get()?.unix_timestamp;

    let event_id = ctx.accounts.config.allocate_event_id()?;
    ctx.accounts
        .event
        .open(event_id, creator, uri, now, ctx.bumps.event)?;

    emit!(EventCreated {
        event_id,
        creator,
        uri: ctx.accounts.event.uri.clone(),
    });

    msg!("Event {} created by {}", event_id, creator);

    Ok(event_id)
}

#[derive(Accounts)]
pub struct CreateEvent<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(
        init,
        payer = creator,
        space = 8 + EventRecord::INIT_SPACE,
        seeds = [EVENT_SEED, config.next_event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: Account<'info, EventRecord>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}
