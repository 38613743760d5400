//! Mint additional supply of an existing token.
//!
//! # Mint Flow
//!
//! 1. Check the wallet capability is present
//! 2. Build the instruction pair: create the recipient's associated token
//!    account, then mint into it
//! 3. Submit against a fresh blockhash via the wallet
//! 4. Poll for confirmation within the blockhash validity window
//!
//! The wallet must hold the mint authority. Rate-limited errors retry the
//! sequence under the configured policy, like the launch flow.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::info;
use wallet::WalletAdapter;

use crate::chain::ChainRpc;
use crate::instructions;
use crate::progress::LaunchStage;
use crate::retry::with_retry;
use crate::{Sdk, SdkError};

// ---------------------------------------------------------------------------
// Parameters / result
// ---------------------------------------------------------------------------

/// Parameters for minting supply of an existing token.
#[derive(Debug, Clone)]
pub struct MintSupplyParams {
    /// The token's mint address.
    pub mint: Pubkey,
    /// Owner of the receiving associated token account.
    pub recipient: Pubkey,
    /// Amount in base units (already scaled by the mint's decimals).
    pub amount: u64,
}

/// Result of a successful supply mint.
#[derive(Debug, Clone)]
pub struct MintSupplyResult {
    /// Signature of the submission.
    pub signature: Signature,
    /// The recipient's associated token account.
    pub recipient_ata: Pubkey,
}

// ---------------------------------------------------------------------------
// Sdk::mint_supply
// ---------------------------------------------------------------------------

impl<C: ChainRpc> Sdk<C> {
    /// Mint `amount` base units to a recipient, creating their associated
    /// token account in the same transaction.
    pub async fn mint_supply(
        &self,
        wallet: &impl WalletAdapter,
        params: &MintSupplyParams,
    ) -> Result<MintSupplyResult, SdkError> {
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
            self.mint_once(wallet, params).await
        })
        .await
    }

    /// One pass of the mint sequence.
    async fn mint_once(
        &self,
        wallet: &impl WalletAdapter,
        params: &MintSupplyParams,
    ) -> Result<MintSupplyResult, SdkError> {
        let payer = wallet.pubkey();

        self.status(&LaunchStage::MintingSupply);
        let (batch, recipient_ata) = instructions::mint_supply_instructions(
            &payer,
            &params.mint,
            &params.recipient,
            params.amount,
        )?;

        let (blockhash, last_valid_block_height) = self.chain().latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&batch, Some(&payer));
        transaction.message.recent_blockhash = blockhash;

        let signature = wallet.sign_and_send(transaction).await?;

        self.status(&LaunchStage::Confirming);
        self.chain()
            .confirm_transaction(&signature, last_valid_block_height)
            .await?;

        self.status(&LaunchStage::SupplyMinted);
        info!(mint = %params.mint, recipient = %params.recipient, %signature, "supply minted");

        Ok(MintSupplyResult {
            signature,
            recipient_ata,
        })
    }
}
