use anchor_lang::prelude::*;

use crate::{constants::*, events::EventMinterAdded, state::*};

/// Grant minting rights on an open event. Only a current minter may call;
/// re-adding an existing minter changes nothing.
pub fn add_event_minter(ctx: Context<AddEventMinter>, event_id: u64, new_minter: Pubkey) -> Result<()> {
    let caller = ctx.accounts.minter.key();
    let added = ctx.accounts.event.add_minter(&caller, new_minter)?;

    if added {
        emit!(EventMinterAdded {
            event_id,
            minter: new_minter,
            added_by: caller,
        });
        msg!("Minter {} added to event {}", new_minter, event_id);
    } else {
        msg!("{} already mints for event {}", new_minter, event_id);
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct AddEventMinter<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,

    pub minter: Signer<'info>,
}
