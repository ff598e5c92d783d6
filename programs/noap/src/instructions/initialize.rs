use anchor_lang::prelude::*;

use crate::{constants::*, events::RegistryInitialized, state::*};

pub fn initialize(ctx: Context<Initialize>, name: String, symbol: String) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    config.init(authority, name, symbol, ctx.bumps.config)?;

    emit!(RegistryInitialized {
        authority,
        name: config.name.clone(),
        symbol: config.symbol.clone(),
    });

    msg!("NOAP registry initialized");
    msg!("Authority: {}", authority);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + RegistryConfig::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
