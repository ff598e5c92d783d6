use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::Metadata,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    errors::NoapError,
    events::TokenMinted,
    state::*,
    utils::{issue_registry_token, load_registry_account, IssueAccounts},
};

/// Issue a token under an event to `recipient`, carrying the event's record.
pub fn mint(ctx: Context<MintToken>, event_id: u64) -> Result<u64> {
    let event = load_registry_account::<EventRecord>(&ctx.accounts.event.to_account_info())?;
    let minter = ctx.accounts.minter.key();
    event.ensure_can_mint(&minter)?;

    let recipient = ctx.accounts.recipient.key();
    let mint_key = ctx.accounts.token_mint.key();
    let now = Clock::get()?.unix_timestamp;

    let token_id = ctx.accounts.config.allocate_token_id()?;
    let name = ctx.accounts.config.name.clone();
    let symbol = ctx.accounts.config.symbol.clone();
    let config_bump = [ctx.accounts.config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_SEED, &config_bump]];

    issue_registry_token(
        IssueAccounts {
            config: ctx.accounts.config.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            recipient_token_account: ctx.accounts.recipient_token_account.to_account_info(),
            metadata: ctx.accounts.token_metadata.to_account_info(),
            master_edition: ctx.accounts.master_edition.to_account_info(),
            payer: ctx.accounts.minter.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            metadata_program: ctx.accounts.metadata_program.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        },
        name,
        symbol,
        event.uri.clone(),
        signer_seeds,
    )?;

    ctx.accounts.token_record.bind(
        token_id,
        mint_key,
        TokenSource::Event { event_id },
        event.uri.clone(),
        recipient,
        now,
        ctx.bumps.token_record,
    );

    emit!(TokenMinted {
        token_id,
        event_id,
        mint: mint_key,
        recipient,
        minter,
        uri: event.uri,
    });

    msg!("Token {} minted under event {}", token_id, event_id);
    msg!("Mint: {}", mint_key);
    msg!("Recipient: {}", recipient);

    Ok(token_id)
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct MintToken<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, RegistryConfig>>,

    /// CHECK: address pinned by seeds; loaded in the handler so a missing event reports `NotFound`
    #[account(
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event: UncheckedAccount<'info>,

    #[account(
        init,
        payer = minter,
        space = 8 + TokenRecord::INIT_SPACE,
        seeds = [TOKEN_SEED, config.next_token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub token_record: Box<Account<'info, TokenRecord>>,

    #[account(
        init,
        payer = minter,
        mint::decimals = NFT_DECIMALS,
        mint::authority = config,
        mint::freeze_authority = config,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            token_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub token_metadata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            token_mint.key().as_ref(),
            MASTER_EDITION_SEED,
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub master_edition: UncheckedAccount<'info>,

    /// CHECK: any address may receive a token
    #[account(
        constraint = recipient.key() != Pubkey::default() @ NoapError::InvalidRecipient
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init,
        payer = minter,
        associated_token::mint = token_mint,
        associated_token::authority = recipient,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub minter: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
