use anchor_lang::prelude::*;
use anchor_lang::Owner;
use anchor_spl::{
    metadata::{
        create_master_edition_v3, create_metadata_accounts_v3,
        mpl_token_metadata::types::DataV2, CreateMasterEditionV3, CreateMetadataAccountsV3,
    },
    token::{mint_to, MintTo},
};

use crate::{constants::*, errors::NoapError};

pub fn validate_uri(uri: &str) -> Result<()> {
    require!(!uri.is_empty(), NoapError::InvalidUri);
    require!(uri.len() <= MAX_URI_LENGTH, NoapError::UriTooLong);
    Ok(())
}

pub fn validate_name(name: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LENGTH, NoapError::NameTooLong);
    Ok(())
}

pub fn validate_symbol(symbol: &str) -> Result<()> {
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, NoapError::SymbolTooLong);
    Ok(())
}

/// Legacy Metaplex accounts pad strings with NUL bytes up to their fixed width.
pub fn unpad_metadata_str(value: &str) -> &str {
    value.trim_end_matches(char::from(0))
}

/// The caller must hold the source token or be its approved delegate for the
/// whole unit. The delegate itself is recorded by the source token program.
pub fn ensure_holder_or_delegate(
    owner: &Pubkey,
    delegate: Option<&Pubkey>,
    delegated_amount: u64,
    caller: &Pubkey,
) -> Result<()> {
    let approved = delegate.map_or(false, |d| d == caller && delegated_amount >= NFT_SUPPLY);
    require!(owner == caller || approved, NoapError::Unauthorized);
    Ok(())
}

/// Deserialize a registry account that may not exist yet.
/// Missing or foreign accounts surface as `NotFound` instead of Anchor's
/// account-validation errors.
pub fn load_registry_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<T> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return err!(NoapError::NotFound);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Accounts needed to issue one registry token
pub struct IssueAccounts<'info> {
    pub config: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub recipient_token_account: AccountInfo<'info>,
    pub metadata: AccountInfo<'info>,
    pub master_edition: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub metadata_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
}

/// Mint the single unit of a registry token and freeze its metadata.
/// The configuration PDA signs as mint and update authority; the master edition
/// caps supply at one.
pub fn issue_registry_token<'info>(
    accounts: IssueAccounts<'info>,
    name: String,
    symbol: String,
    uri: String,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    mint_to(
        CpiContext::new_with_signer(
            accounts.token_program.clone(),
            MintTo {
                mint: accounts.mint.clone(),
                to: accounts.recipient_token_account.clone(),
                authority: accounts.config.clone(),
            },
            signer_seeds,
        ),
        NFT_SUPPLY,
    )?;

    let data = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            accounts.metadata_program.clone(),
            CreateMetadataAccountsV3 {
                metadata: accounts.metadata.clone(),
                mint: accounts.mint.clone(),
                mint_authority: accounts.config.clone(),
                payer: accounts.payer.clone(),
                update_authority: accounts.config.clone(),
                system_program: accounts.system_program.clone(),
                rent: accounts.rent.clone(),
            },
            signer_seeds,
        ),
        data,
        false, // records are immutable once bound
        true,  // update_authority_is_signer
        None,
    )?;

    create_master_edition_v3(
        CpiContext::new_with_signer(
            accounts.metadata_program.clone(),
            CreateMasterEditionV3 {
                edition: accounts.master_edition.clone(),
                mint: accounts.mint.clone(),
                update_authority: accounts.config.clone(),
                mint_authority: accounts.config.clone(),
                payer: accounts.payer.clone(),
                metadata: accounts.metadata.clone(),
                token_program: accounts.token_program.clone(),
                system_program: accounts.system_program.clone(),
                rent: accounts.rent.clone(),
            },
            signer_seeds,
        ),
        Some(0),
    )?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn error_code<T: std::fmt::Debug>(result: Result<T>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
        other => panic!("expected an anchor error, got {:?}", other),
    }
}
