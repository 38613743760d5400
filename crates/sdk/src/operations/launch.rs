//! Launch a fungible token with on-chain metadata.
//!
//! # Launch Flow
//!
//! 1. Check the wallet capability is present
//! 2. Generate a fresh mint keypair
//! 3. Query the rent-exempt minimum for the mint account
//! 4. Derive the metadata account address from the mint
//! 5. Assemble instructions in dependency order -- create account,
//!    initialize mint, create metadata, create the associated token
//!    account, mint the supply (plus a sample amount when it differs)
//! 6. Submit as one transaction or three independently-confirmed ones,
//!    each bound to a fresh blockhash; the batch that initializes the
//!    mint is co-signed with the mint keypair
//! 7. Poll each submission for confirmation within its blockhash
//!    validity window
//! 8. Verify the mint account exists
//!
//! On a rate-limited error the whole sequence restarts from step 2 with a
//! fresh mint keypair, bounded by the configured retry policy.

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::info;
use wallet::WalletAdapter;

use crate::chain::ChainRpc;
use crate::instructions::{self, MINT_ACCOUNT_SIZE};
use crate::progress::LaunchStage;
use crate::retry::with_retry;
use crate::{Sdk, SdkError, SubmitMode};

// ---------------------------------------------------------------------------
// Parameters / result
// ---------------------------------------------------------------------------

/// Parameters for launching a new token.
#[derive(Debug, Clone)]
pub struct LaunchTokenParams {
    /// Token display name.
    pub name: String,
    /// Token ticker symbol.
    pub symbol: String,
    /// Number of decimal places.
    pub decimals: u8,
    /// Initial supply in whole tokens, scaled by `10^decimals` on mint.
    pub initial_supply: u64,
    /// Sample amount in whole tokens, minted only when it differs from the
    /// initial supply. `None` uses the configured default.
    pub sample_amount: Option<u64>,
    /// Whether the wallet keeps the freeze authority over token accounts.
    pub freeze_authority: bool,
    /// Whether the metadata record stays updatable.
    pub is_mutable: bool,
    /// URI of the off-chain metadata document.
    pub metadata_uri: String,
    /// Recipient of the minted supply. Defaults to the wallet key.
    pub recipient: Option<Pubkey>,
}

/// Result of a successful launch.
#[derive(Debug, Clone)]
pub struct LaunchTokenResult {
    /// Signature of the final submission.
    pub signature: Signature,
    /// Every submission signature, in order.
    pub signatures: Vec<Signature>,
    /// The new token's mint address.
    pub mint: Pubkey,
    /// The metadata account derived from the mint.
    pub metadata: Pubkey,
    /// Explorer link for the new token.
    pub explorer_url: String,
}

// ---------------------------------------------------------------------------
// Sdk::launch_token
// ---------------------------------------------------------------------------

impl<C: ChainRpc> Sdk<C> {
    /// Launch a new fungible token.
    ///
    /// Fails with [`SdkError::WalletNotFound`] before any network call when
    /// the wallet capability is absent. Rate-limited errors restart the
    /// whole step sequence; every other failure propagates immediately with
    /// its underlying payload.
    pub async fn launch_token(
        &self,
        wallet: &impl WalletAdapter,
        params: &LaunchTokenParams,
    ) -> Result<LaunchTokenResult, SdkError> {
        if !wallet.is_connected() {
            return Err(SdkError::WalletNotFound);
        }

        let policy = self.retry_policy();
        let max_attempts = policy.max_attempts;
        with_retry(policy, SdkError::is_rate_limited, |attempt| async move {
            if attempt > 1 {
                self.status(&LaunchStage::Retrying {
                    attempt: attempt - 1,
                    max_attempts,
                });
            }
            self.launch_once(wallet, params).await
        })
        .await
    }

    /// One full pass of the launch sequence.
    async fn launch_once(
        &self,
        wallet: &impl WalletAdapter,
        params: &LaunchTokenParams,
    ) -> Result<LaunchTokenResult, SdkError> {
        let payer = wallet.pubkey();

        // 1. Fresh mint keypair. A retried attempt must not reuse a key a
        //    previous submission may have partially created.
        self.status(&LaunchStage::CreatingMint);
        let mint = Keypair::new();
        let mint_pubkey = mint.pubkey();

        // 2. Rent-exempt minimum for the mint account.
        let mint_rent = self.chain().rent_exempt_minimum(MINT_ACCOUNT_SIZE).await?;

        // 3. Metadata address and the full instruction sequence.
        let metadata = instructions::metadata_address(&mint_pubkey);
        let plan = instructions::launch_instructions(&payer, &mint_pubkey, params, mint_rent)?;

        let batches: Vec<Vec<Instruction>> = match self.submit_mode() {
            SubmitMode::Single => vec![plan.combined()],
            SubmitMode::Split => Vec::from(plan.batches()),
        };
        let split = batches.len() > 1;

        // 4. Submit each batch against a fresh blockhash and wait for it
        //    to confirm before the next one may depend on its accounts.
        let mut signatures = Vec::with_capacity(batches.len());
        for (index, batch) in batches.into_iter().enumerate() {
            if split {
                match index {
                    1 => self.status(&LaunchStage::CreatingMetadata),
                    2 => self.status(&LaunchStage::MintingSupply),
                    _ => {}
                }
            }

            let (blockhash, last_valid_block_height) = self.chain().latest_blockhash().await?;
            let mut transaction = Transaction::new_with_payer(&batch, Some(&payer));
            if index == 0 {
                // Only the batch creating and initializing the mint needs
                // the mint key's co-signature.
                transaction.try_partial_sign(&[&mint], blockhash)?;
            } else {
                transaction.message.recent_blockhash = blockhash;
            }

            let signature = wallet.sign_and_send(transaction).await?;

            self.status(&LaunchStage::Confirming);
            self.chain()
                .confirm_transaction(&signature, last_valid_block_height)
                .await?;
            signatures.push(signature);
        }

        // 5. Post-submission existence check on the mint account.
        self.status(&LaunchStage::Verifying);
        if !self.chain().account_exists(&mint_pubkey).await? {
            return Err(SdkError::AccountMissing(mint_pubkey));
        }

        // Invariant: both submit modes produce at least one batch.
        let signature = *signatures.last().expect("at least one submission");
        let explorer_url = self.config().network.token_url(&mint_pubkey.to_string());

        self.status(&LaunchStage::Complete);
        info!(mint = %mint_pubkey, %signature, "token launched");

        Ok(LaunchTokenResult {
            signature,
            signatures,
            mint: mint_pubkey,
            metadata,
            explorer_url,
        })
    }
}
