use anchor_lang::prelude::*;

use crate::{constants::*, events::EventEnded, state::*};

pub fn end_event(ctx: Context<EndEvent>, event_id: u64) -> Result<()> {
    let caller = ctx.accounts.minter.key();
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.event.end(&caller, now)?;

    emit!(EventEnded {
        event_id,
        ended_by: caller,
        timestamp: now,
    });

    msg!("Event {} ended by {}", event_id, caller);

    Ok(())
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct EndEvent<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,

    pub minter: Signer<'info>,
}
