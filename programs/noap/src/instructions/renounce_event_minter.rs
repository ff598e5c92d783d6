use anchor_lang::prelude::*;

use crate::{constants::*, events::EventMinterRenounced, state::*};

pub fn renounce_event_minter(ctx: Context<RenounceEventMinter>, event_id: u64) -> Result<()> {
    let caller = ctx.accounts.minter.key();
    let event = &mut ctx.accounts.event;
    event.renounce_minter(&caller)?;

    let remaining_minters = event.minters.len() as u32;
    emit!(EventMinterRenounced {
        event_id,
        minter: caller,
        remaining_minters,
    });

    msg!("Minter {} renounced event {}", caller, event_id);
    if remaining_minters == 0 && event.is_open() {
        msg!("Event {} has no minters left", event_id);
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct RenounceEventMinter<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,

    pub minter: Signer<'info>,
}
