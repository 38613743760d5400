//! Instruction assembly for the launch flow.
//!
//! Pure builders with no network access. Instructions are produced in
//! dependency order: the mint account must exist before it is initialized,
//! the mint must be initialized before metadata or token accounts refer to
//! it, and the associated token account must exist before supply is minted
//! into it.

use mpl_token_metadata::accounts::Metadata;
use mpl_token_metadata::instructions::{
    CreateMetadataAccountV3, CreateMetadataAccountV3InstructionArgs,
};
use mpl_token_metadata::types::DataV2;
use solana_program::program_pack::Pack;
use solana_program::system_instruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;
use spl_token::state::Mint;

use crate::operations::launch::LaunchTokenParams;
use crate::SdkError;

/// Size in bytes of an SPL mint account.
pub const MINT_ACCOUNT_SIZE: usize = Mint::LEN;

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Deterministic metadata account address for a mint, derived under the
/// token-metadata program namespace.
pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    Metadata::find_pda(mint).0
}

/// Scale a whole-token amount into base units (`amount * 10^decimals`),
/// saturating at `u64::MAX`.
pub fn scaled_amount(amount: u64, decimals: u8) -> u64 {
    let multiplier = 10u64.checked_pow(decimals as u32).unwrap_or(u64::MAX);
    amount.saturating_mul(multiplier)
}

// ---------------------------------------------------------------------------
// Launch sequence
// ---------------------------------------------------------------------------

/// The launch instruction sequence, grouped by submission batch.
///
/// Only the first group requires the mint keypair's co-signature.
pub struct LaunchInstructions {
    /// Create the mint account and initialize the mint.
    pub create_and_init: Vec<Instruction>,
    /// Create the on-chain metadata record.
    pub metadata: Vec<Instruction>,
    /// Create the recipient's associated token account and mint supply.
    pub fund: Vec<Instruction>,
}

impl LaunchInstructions {
    /// All instructions as a single submission.
    pub fn combined(self) -> Vec<Instruction> {
        let mut all = self.create_and_init;
        all.extend(self.metadata);
        all.extend(self.fund);
        all
    }

    /// The three-submission split, in dependency order.
    pub fn batches(self) -> [Vec<Instruction>; 3] {
        [self.create_and_init, self.metadata, self.fund]
    }
}

/// Assemble the full launch sequence for a new mint.
pub fn launch_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    params: &LaunchTokenParams,
    mint_rent: u64,
) -> Result<LaunchInstructions, SdkError> {
    let freeze_authority = params.freeze_authority.then_some(payer);
    let create_and_init = vec![
        system_instruction::create_account(
            payer,
            mint,
            mint_rent,
            MINT_ACCOUNT_SIZE as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint,
            payer,
            freeze_authority,
            params.decimals,
        )?,
    ];

    let metadata_ix = CreateMetadataAccountV3 {
        metadata: metadata_address(mint),
        mint: *mint,
        mint_authority: *payer,
        payer: *payer,
        update_authority: (*payer, true),
        system_program: solana_program::system_program::id(),
        rent: Some(solana_program::sysvar::rent::id()),
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data: DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.metadata_uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        is_mutable: params.is_mutable,
        collection_details: None,
    });

    let recipient = params.recipient.unwrap_or(*payer);
    let recipient_ata = get_associated_token_address(&recipient, mint);
    let mut fund = vec![create_associated_token_account(
        payer,
        &recipient,
        mint,
        &spl_token::id(),
    )];

    let initial = scaled_amount(params.initial_supply, params.decimals);
    if initial > 0 {
        fund.push(spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            &recipient_ata,
            payer,
            &[],
            initial,
        )?);
    }

    // The sample mint rides along only when it differs from the supply.
    let sample = scaled_amount(
        params
            .sample_amount
            .unwrap_or(config::constants::DEFAULT_SAMPLE_AMOUNT),
        params.decimals,
    );
    if sample > 0 && sample != initial {
        fund.push(spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            &recipient_ata,
            payer,
            &[],
            sample,
        )?);
    }

    Ok(LaunchInstructions {
        create_and_init,
        metadata: vec![metadata_ix],
        fund,
    })
}

// ---------------------------------------------------------------------------
// Supply mint
// ---------------------------------------------------------------------------

/// Instructions to create a recipient's associated token account and mint
/// a raw base-unit amount into it. Returns the ATA address alongside.
pub fn mint_supply_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Result<(Vec<Instruction>, Pubkey), SdkError> {
    let recipient_ata = get_associated_token_address(recipient, mint);
    let instructions = vec![
        create_associated_token_account(payer, recipient, mint, &spl_token::id()),
        spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            &recipient_ata,
            payer,
            &[],
            amount,
        )?,
    ];
    Ok((instructions, recipient_ata))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
