use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{Metadata, MetadataAccount},
    token::{Mint, Token, TokenAccount},
    token_interface::{self, TokenInterface, TransferChecked},
};

use crate::{
    constants::*,
    errors::NoapError,
    events::TokenMigrated,
    state::*,
    utils::{
        ensure_holder_or_delegate, issue_registry_token, unpad_metadata_str, validate_uri,
        IssueAccounts,
    },
};

/// Retire a token of another registry into custody and issue a registry token
/// with the same descriptive record to the caller. Succeeds at most once per
/// (source token program, source mint).
pub fn burn_and_remint(ctx: Context<BurnAndRemint>) -> Result<u64> {
    let holder = ctx.accounts.holder.key();
    let registry = ctx.accounts.source_token_program.key();
    let source_token = ctx.accounts.source_mint.key();

    let source_account = &ctx.accounts.source_token_account;
    let delegate = match source_account.delegate {
        COption::Some(ref delegate) => Some(delegate),
        COption::None => None,
    };
    ensure_holder_or_delegate(
        &source_account.owner,
        delegate,
        source_account.delegated_amount,
        &holder,
    )?;

    ctx.accounts.migration.ensure_unclaimed()?;

    let decimals = ctx.accounts.source_mint.decimals;
    require!(
        decimals == NFT_DECIMALS && source_account.amount == NFT_SUPPLY,
        NoapError::InvalidSourceToken
    );

    // Read the record before the source leaves the holder's hands
    let uri = unpad_metadata_str(&ctx.accounts.source_metadata.uri).to_string();
    validate_uri(&uri)?;

    let now = Clock::get()?.unix_timestamp;
    MigrationRecord::claim(
        &mut ctx.accounts.migration,
        registry,
        source_token,
        holder,
        now,
        ctx.bumps.migration,
    )?;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.source_token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.source_token_account.to_account_info(),
                mint: ctx.accounts.source_mint.to_account_info(),
                to: ctx.accounts.custody_token_account.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        NFT_SUPPLY,
        decimals,
    )
    .map_err(|e| {
        msg!("Source token transfer failed: {:?}", e);
        error!(NoapError::ExternalTransferFailed)
    })?;

    let token_id = ctx.accounts.config.allocate_token_id()?;
    let mint_key = ctx.accounts.token_mint.key();
    let name = ctx.accounts.config.name.clone();
    let symbol = ctx.accounts.config.symbol.clone();
    let config_bump = [ctx.accounts.config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_SEED, &config_bump]];

    issue_registry_token(
        IssueAccounts {
            config: ctx.accounts.config.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            recipient_token_account: ctx.accounts.holder_token_account.to_account_info(),
            metadata: ctx.accounts.token_metadata.to_account_info(),
            master_edition: ctx.accounts.master_edition.to_account_info(),
            payer: ctx.accounts.holder.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            metadata_program: ctx.accounts.metadata_program.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        },
        name,
        symbol,
        uri.clone(),
        signer_seeds,
    )?;

    ctx.accounts.token_record.bind(
        token_id,
        mint_key,
        TokenSource::Migration {
            registry,
            source_token,
        },
        uri.clone(),
        holder,
        now,
        ctx.bumps.token_record,
    );
    ctx.accounts.migration.complete(token_id)?;
    ctx.accounts.config.record_migration()?;

    emit!(TokenMigrated {
        token_id,
        registry,
        source_token,
        mint: mint_key,
        holder,
        uri,
    });

    msg!("Source token {} retired into custody", source_token);
    msg!("Token {} reminted to {}", token_id, holder);

    Ok(token_id)
}

#[derive(Accounts)]
pub struct BurnAndRemint<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, RegistryConfig>>,

    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + MigrationRecord::INIT_SPACE,
        seeds = [
            MIGRATION_SEED,
            source_token_program.key().as_ref(),
            source_mint.key().as_ref(),
        ],
        bump
    )]
    pub migration: Box<Account<'info, MigrationRecord>>,

    #[account(
        mint::token_program = source_token_program,
    )]
    pub source_mint: Box<InterfaceAccount<'info, token_interface::Mint>>,

    #[account(
        mut,
        token::mint = source_mint,
        token::token_program = source_token_program,
    )]
    pub source_token_account: Box<InterfaceAccount<'info, token_interface::TokenAccount>>,

    #[account(
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            source_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
        constraint = source_metadata.mint == source_mint.key() @ NoapError::SourceMetadataMismatch,
    )]
    pub source_metadata: Box<Account<'info, MetadataAccount>>,

    /// Registry-owned account that keeps the retired source token
    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = source_mint,
        associated_token::authority = config,
        associated_token::token_program = source_token_program,
    )]
    pub custody_token_account: Box<InterfaceAccount<'info, token_interface::TokenAccount>>,

    #[account(
        init,
        payer = holder,
        space = 8 + TokenRecord::INIT_SPACE,
        seeds = [TOKEN_SEED, config.next_token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub token_record: Box<Account<'info, TokenRecord>>,

    #[account(
        init,
        payer = holder,
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

    #[account(
        init,
        payer = holder,
        associated_token::mint = token_mint,
        associated_token::authority = holder,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,

    /// Holder of the source token, or its approved delegate
    #[account(mut)]
    pub holder: Signer<'info>,

    pub source_token_program: Interface<'info, TokenInterface>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
