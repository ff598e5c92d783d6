//! Program-test harness for the registry.
//!
//! The registry runs natively through `processor!`; SPL Token, Token-2022 and
//! the associated token program come bundled with `solana-program-test`. Token
//! Metadata is loaded from `tests/fixtures/mpl_token_metadata.so`
//! (`anchor run fetch-fixtures`).

#![allow(dead_code)]

use std::path::Path;

use anchor_lang::{
    solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey},
    AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas,
};
use anchor_spl::{
    associated_token::{self, get_associated_token_address_with_program_id},
    metadata::mpl_token_metadata::{self, accounts::Metadata, types::Key},
    token::spl_token::{
        self,
        solana_program::{program_option::COption, program_pack::Pack},
        state::{Account as TokenState, AccountState, Mint as MintState},
    },
};
use borsh::BorshSerialize;
use noap::{
    constants::{EVENT_SEED, MASTER_EDITION_SEED, METADATA_SEED, MIGRATION_SEED, REGISTRY_SEED, TOKEN_SEED},
    state::{EventRecord, MigrationRecord, RegistryConfig, TokenRecord},
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    rent::Rent,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

pub const METAPLEX_FIXTURE: &str = "tests/fixtures/mpl_token_metadata.so";
pub const REGISTRY_NAME: &str = "NOAP";
pub const REGISTRY_SYMBOL: &str = "NOAP";

const MAX_NAME_LEN: usize = 32;
const MAX_SYMBOL_LEN: usize = 10;
const MAX_URI_LEN: usize = 200;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // Anchor's entrypoint ties the account infos to the slice lifetime
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    noap::entry(program_id, accounts, data)
}

pub fn metaplex_available() -> bool {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(METAPLEX_FIXTURE)
        .exists()
}

/// Issuance and migration go through Token Metadata; without the program
/// binary those tests have nothing to run against.
pub fn skip_without_metaplex() -> bool {
    if metaplex_available() {
        return false;
    }
    eprintln!("skipping: {METAPLEX_FIXTURE} is missing, run `anchor run fetch-fixtures`");
    true
}

// ========== Addresses ==========

pub fn config_pda() -> Pubkey {
    Pubkey::find_program_address(&[REGISTRY_SEED], &noap::ID).0
}

pub fn event_pda(event_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[EVENT_SEED, &event_id.to_le_bytes()], &noap::ID).0
}

pub fn token_pda(token_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[TOKEN_SEED, &token_id.to_le_bytes()], &noap::ID).0
}

pub fn migration_pda(registry: &Pubkey, source_token: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[MIGRATION_SEED, registry.as_ref(), source_token.as_ref()],
        &noap::ID,
    )
    .0
}

pub fn metadata_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[METADATA_SEED, mpl_token_metadata::ID.as_ref(), mint.as_ref()],
        &mpl_token_metadata::ID,
    )
    .0
}

pub fn master_edition_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
            MASTER_EDITION_SEED,
        ],
        &mpl_token_metadata::ID,
    )
    .0
}

pub fn holding(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &spl_token::ID)
}

// ========== Errors ==========

pub fn code(err: TransactionError) -> u32 {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("expected a program error, got {other:?}"),
    }
}

pub fn failed_with(err: BanksClientError) -> u32 {
    code(err.unwrap())
}

pub fn noap_code(err: noap::errors::NoapError) -> u32 {
    u32::from(err)
}

pub fn anchor_code(err: anchor_lang::error::ErrorCode) -> u32 {
    err as u32
}

// ========== Source tokens ==========

/// Token of another registry, seeded straight into genesis
#[derive(Clone, Debug)]
pub struct SourceToken {
    pub holder: Pubkey,
    pub uri: String,
    pub token_program: Pubkey,
    pub decimals: u8,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub frozen: bool,
    /// Mint written into the metadata record; defaults to the real mint
    pub recorded_mint: Option<Pubkey>,
}

impl SourceToken {
    pub fn nft(holder: &Pubkey, uri: &str) -> Self {
        Self {
            holder: *holder,
            uri: uri.to_string(),
            token_program: spl_token::ID,
            decimals: 0,
            amount: 1,
            delegate: None,
            frozen: false,
            recorded_mint: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SourceNft {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub token_program: Pubkey,
}

impl SourceNft {
    pub fn custody(&self) -> Pubkey {
        get_associated_token_address_with_program_id(&config_pda(), &self.mint, &self.token_program)
    }
}

fn padded(value: &str, width: usize) -> String {
    let mut out = value.to_string();
    while out.len() < width {
        out.push('\0');
    }
    out
}

fn rent_exempt(data: Vec<u8>, owner: Pubkey) -> Account {
    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

// ========== Setup ==========

pub struct Setup {
    program_test: ProgramTest,
}

impl Setup {
    pub fn new() -> Self {
        let mut program_test = ProgramTest::new("noap", noap::ID, processor!(process_instruction));
        if metaplex_available() {
            program_test.add_program("mpl_token_metadata", mpl_token_metadata::ID, None);
        }
        program_test.set_compute_max_units(1_000_000);
        Self { program_test }
    }

    /// Fresh keypair with enough SOL to pay for the accounts it creates
    pub fn actor(&mut self) -> Keypair {
        let actor = Keypair::new();
        self.program_test.add_account(
            actor.pubkey(),
            Account::new(10 * LAMPORTS_PER_SOL, 0, &anchor_lang::system_program::ID),
        );
        actor
    }

    pub fn source_token(&mut self, source: SourceToken) -> SourceNft {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let mut mint_data = vec![0u8; MintState::LEN];
        MintState::pack(
            MintState {
                mint_authority: COption::Some(authority),
                supply: source.amount,
                decimals: source.decimals,
                is_initialized: true,
                freeze_authority: COption::Some(authority),
            },
            &mut mint_data,
        )
        .unwrap();
        self.program_test
            .add_account(mint, rent_exempt(mint_data, source.token_program));

        let token_account =
            get_associated_token_address_with_program_id(&source.holder, &mint, &source.token_program);
        let mut account_data = vec![0u8; TokenState::LEN];
        TokenState::pack(
            TokenState {
                mint,
                owner: source.holder,
                amount: source.amount,
                delegate: source.delegate.map_or(COption::None, COption::Some),
                state: if source.frozen {
                    AccountState::Frozen
                } else {
                    AccountState::Initialized
                },
                is_native: COption::None,
                delegated_amount: if source.delegate.is_some() { source.amount } else { 0 },
                close_authority: COption::None,
            },
            &mut account_data,
        )
        .unwrap();
        self.program_test
            .add_account(token_account, rent_exempt(account_data, source.token_program));

        let metadata = Metadata {
            key: Key::MetadataV1,
            update_authority: authority,
            mint: source.recorded_mint.unwrap_or(mint),
            name: padded("Source", MAX_NAME_LEN),
            symbol: padded("SRC", MAX_SYMBOL_LEN),
            uri: padded(&source.uri, MAX_URI_LEN),
            seller_fee_basis_points: 0,
            creators: None,
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: None,
            token_standard: None,
            collection: None,
            uses: None,
            collection_details: None,
            programmable_config: None,
        };
        self.program_test.add_account(
            metadata_pda(&mint),
            rent_exempt(metadata.try_to_vec().unwrap(), mpl_token_metadata::ID),
        );

        SourceNft {
            mint,
            token_account,
            token_program: source.token_program,
        }
    }

    pub fn source_nft(&mut self, holder: &Pubkey, uri: &str) -> SourceNft {
        self.source_token(SourceToken::nft(holder, uri))
    }

    /// Start the bank and initialize the registry with the payer as authority
    pub async fn start(self) -> TestRegistry {
        let context = self.program_test.start_with_context().await;
        let mut registry = TestRegistry { context };

        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::Initialize {
                config: config_pda(),
                authority: registry.context.payer.pubkey(),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: noap::instruction::Initialize {
                name: REGISTRY_NAME.to_string(),
                symbol: REGISTRY_SYMBOL.to_string(),
            }
            .data(),
        };
        registry.process(&[ix], &[]).await.unwrap();
        registry
    }
}

// ========== Registry client ==========

pub struct TestRegistry {
    pub context: ProgramTestContext,
}

impl TestRegistry {
    /// Send one transaction paid by the context payer. Every send waits for a
    /// fresh blockhash so repeated identical calls are not deduplicated.
    pub async fn process(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut all_signers: Vec<&Keypair> = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            &all_signers[..],
            blockhash,
        );
        self.context.banks_client.process_transaction(tx).await
    }

    /// Simulate a read instruction and decode its return data.
    pub async fn view<T: AnchorDeserialize>(&mut self, ix: Instruction) -> Result<T, TransactionError> {
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.context.payer.pubkey()),
            &[&self.context.payer],
            self.context.last_blockhash,
        );
        let simulation = self
            .context
            .banks_client
            .simulate_transaction(tx)
            .await
            .unwrap();
        if let Some(Err(err)) = simulation.result {
            return Err(err);
        }
        let mut data = simulation
            .simulation_details
            .and_then(|details| details.return_data)
            .map(|return_data| return_data.data)
            .unwrap_or_default();
        // The runtime trims trailing zero bytes off return data
        data.resize(data.len() + 64, 0);
        Ok(T::deserialize(&mut data.as_slice()).unwrap())
    }

    pub async fn account<T: AccountDeserialize>(&mut self, address: Pubkey) -> Option<T> {
        let account = self.context.banks_client.get_account(address).await.unwrap()?;
        Some(T::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    pub async fn token_state(&mut self, address: Pubkey) -> Option<TokenState> {
        let account = self.context.banks_client.get_account(address).await.unwrap()?;
        // Token-2022 accounts carry extensions after the base layout
        Some(TokenState::unpack(&account.data[..TokenState::LEN]).unwrap())
    }

    pub async fn config(&mut self) -> RegistryConfig {
        self.account(config_pda()).await.unwrap()
    }

    pub async fn event(&mut self, event_id: u64) -> Option<EventRecord> {
        self.account(event_pda(event_id)).await
    }

    pub async fn token(&mut self, token_id: u64) -> Option<TokenRecord> {
        self.account(token_pda(token_id)).await
    }

    pub async fn migration(&mut self, source: &SourceNft) -> Option<MigrationRecord> {
        self.account(migration_pda(&source.token_program, &source.mint))
            .await
    }

    // ========== Instructions ==========

    pub async fn create_event(&mut self, creator: &Keypair, uri: &str) -> Result<u64, BanksClientError> {
        let event_id = self.config().await.next_event_id;
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::CreateEvent {
                config: config_pda(),
                event: event_pda(event_id),
                creator: creator.pubkey(),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: noap::instruction::CreateEvent { uri: uri.to_string() }.data(),
        };
        self.process(&[ix], &[creator]).await?;
        Ok(event_id)
    }

    pub async fn add_event_minter(
        &mut self,
        caller: &Keypair,
        event_id: u64,
        new_minter: Pubkey,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::AddEventMinter {
                event: event_pda(event_id),
                minter: caller.pubkey(),
            }
            .to_account_metas(None),
            data: noap::instruction::AddEventMinter { event_id, new_minter }.data(),
        };
        self.process(&[ix], &[caller]).await
    }

    pub async fn renounce_event_minter(
        &mut self,
        caller: &Keypair,
        event_id: u64,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::RenounceEventMinter {
                event: event_pda(event_id),
                minter: caller.pubkey(),
            }
            .to_account_metas(None),
            data: noap::instruction::RenounceEventMinter { event_id }.data(),
        };
        self.process(&[ix], &[caller]).await
    }

    pub async fn end_event(&mut self, caller: &Keypair, event_id: u64) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::EndEvent {
                event: event_pda(event_id),
                minter: caller.pubkey(),
            }
            .to_account_metas(None),
            data: noap::instruction::EndEvent { event_id }.data(),
        };
        self.process(&[ix], &[caller]).await
    }

    /// Returns the new token id and its mint
    pub async fn mint(
        &mut self,
        minter: &Keypair,
        event_id: u64,
        recipient: Pubkey,
    ) -> Result<(u64, Pubkey), BanksClientError> {
        let token_id = self.config().await.next_token_id;
        let token_mint = Keypair::new();
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::MintToken {
                config: config_pda(),
                event: event_pda(event_id),
                token_record: token_pda(token_id),
                token_mint: token_mint.pubkey(),
                token_metadata: metadata_pda(&token_mint.pubkey()),
                master_edition: master_edition_pda(&token_mint.pubkey()),
                recipient,
                recipient_token_account: holding(&recipient, &token_mint.pubkey()),
                minter: minter.pubkey(),
                token_program: spl_token::ID,
                associated_token_program: associated_token::ID,
                metadata_program: mpl_token_metadata::ID,
                system_program: anchor_lang::system_program::ID,
                rent: anchor_lang::solana_program::sysvar::rent::ID,
            }
            .to_account_metas(None),
            data: noap::instruction::Mint { event_id }.data(),
        };
        self.process(&[ix], &[minter, &token_mint]).await?;
        Ok((token_id, token_mint.pubkey()))
    }

    /// Returns the new token id and its mint
    pub async fn burn_and_remint(
        &mut self,
        caller: &Keypair,
        source: &SourceNft,
    ) -> Result<(u64, Pubkey), BanksClientError> {
        let token_id = self.config().await.next_token_id;
        let token_mint = Keypair::new();
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::BurnAndRemint {
                config: config_pda(),
                migration: migration_pda(&source.token_program, &source.mint),
                source_mint: source.mint,
                source_token_account: source.token_account,
                source_metadata: metadata_pda(&source.mint),
                custody_token_account: source.custody(),
                token_record: token_pda(token_id),
                token_mint: token_mint.pubkey(),
                token_metadata: metadata_pda(&token_mint.pubkey()),
                master_edition: master_edition_pda(&token_mint.pubkey()),
                holder_token_account: holding(&caller.pubkey(), &token_mint.pubkey()),
                holder: caller.pubkey(),
                source_token_program: source.token_program,
                token_program: spl_token::ID,
                associated_token_program: associated_token::ID,
                metadata_program: mpl_token_metadata::ID,
                system_program: anchor_lang::system_program::ID,
                rent: anchor_lang::solana_program::sysvar::rent::ID,
            }
            .to_account_metas(None),
            data: noap::instruction::BurnAndRemint {}.data(),
        };
        self.process(&[ix], &[caller, &token_mint]).await?;
        Ok((token_id, token_mint.pubkey()))
    }

    // ========== Reads ==========

    pub async fn last_event_id(&mut self) -> Result<u64, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadRegistry { config: config_pda() }.to_account_metas(None),
            data: noap::instruction::GetLastEventId {}.data(),
        };
        self.view(ix).await
    }

    pub async fn last_token_id(&mut self) -> Result<u64, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadRegistry { config: config_pda() }.to_account_metas(None),
            data: noap::instruction::GetLastTokenId {}.data(),
        };
        self.view(ix).await
    }

    pub async fn event_uri(&mut self, event_id: u64) -> Result<String, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadEvent { event: event_pda(event_id) }.to_account_metas(None),
            data: noap::instruction::EventUri { event_id }.data(),
        };
        self.view(ix).await
    }

    pub async fn is_event_minter(&mut self, event_id: u64, address: Pubkey) -> Result<bool, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadEvent { event: event_pda(event_id) }.to_account_metas(None),
            data: noap::instruction::IsEventMinter { event_id, address }.data(),
        };
        self.view(ix).await
    }

    pub async fn is_event_mintable(&mut self, event_id: u64) -> Result<bool, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadEvent { event: event_pda(event_id) }.to_account_metas(None),
            data: noap::instruction::IsEventMintable { event_id }.data(),
        };
        self.view(ix).await
    }

    pub async fn token_uri(&mut self, token_id: u64) -> Result<String, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadToken { token_record: token_pda(token_id) }
                .to_account_metas(None),
            data: noap::instruction::TokenUri { token_id }.data(),
        };
        self.view(ix).await
    }

    pub async fn token_event(&mut self, token_id: u64) -> Result<Option<u64>, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadToken { token_record: token_pda(token_id) }
                .to_account_metas(None),
            data: noap::instruction::TokenEvent { token_id }.data(),
        };
        self.view(ix).await
    }

    pub async fn owner_of(
        &mut self,
        token_id: u64,
        holder_token_account: Pubkey,
    ) -> Result<Pubkey, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadTokenOwner {
                token_record: token_pda(token_id),
                holder_token_account,
            }
            .to_account_metas(None),
            data: noap::instruction::OwnerOf { token_id }.data(),
        };
        self.view(ix).await
    }

    pub async fn migrated_token_id(&mut self, source: &SourceNft) -> Result<Option<u64>, TransactionError> {
        let ix = Instruction {
            program_id: noap::ID,
            accounts: noap::accounts::ReadMigration {
                migration: migration_pda(&source.token_program, &source.mint),
            }
            .to_account_metas(None),
            data: noap::instruction::MigratedTokenId {
                registry: source.token_program,
                source_token: source.mint,
            }
            .data(),
        };
        self.view(ix).await
    }
}
