//! Chain RPC surface consumed by the orchestrator.
//!
//! [`ChainRpc`] is a trait so tests can swap in a mock; [`SolanaRpc`] is the
//! concrete implementation over a Solana JSON-RPC node at confirmed
//! commitment. Four queries are consumed: rent-exempt minimum, latest
//! blockhash, confirmation status, and account info.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tracing::debug;

use crate::SdkError;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// The chain queries the launch flow depends on.
pub trait ChainRpc: Send + Sync {
    /// Minimum lamport balance for rent exemption of an account of
    /// `space` bytes.
    fn rent_exempt_minimum(
        &self,
        space: usize,
    ) -> impl Future<Output = Result<u64, SdkError>> + Send;

    /// The latest blockhash and the last block height it is valid for.
    fn latest_blockhash(&self) -> impl Future<Output = Result<(Hash, u64), SdkError>> + Send;

    /// Wait until `signature` confirms.
    ///
    /// Fails with [`SdkError::TransactionFailed`] when the confirmation
    /// carries a non-null error field, or [`SdkError::BlockhashExpired`]
    /// when the chain moves past `last_valid_block_height` first.
    fn confirm_transaction(
        &self,
        signature: &Signature,
        last_valid_block_height: u64,
    ) -> impl Future<Output = Result<(), SdkError>> + Send;

    /// Whether an account exists at `address`.
    fn account_exists(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<bool, SdkError>> + Send;
}

// ---------------------------------------------------------------------------
// SolanaRpc
// ---------------------------------------------------------------------------

/// [`ChainRpc`] over a Solana JSON-RPC node.
pub struct SolanaRpc {
    rpc: Arc<RpcClient>,
    poll_interval: Duration,
}

impl SolanaRpc {
    /// Connects to the cluster's public RPC endpoint at confirmed
    /// commitment.
    pub fn new(network: &config::NetworkConfig) -> Self {
        let rpc = Arc::new(RpcClient::new_with_commitment(
            network.rpc_url.to_string(),
            CommitmentConfig::confirmed(),
        ));
        Self::from_client(rpc)
    }

    /// Wraps an existing RPC handle.
    pub fn from_client(rpc: Arc<RpcClient>) -> Self {
        Self {
            rpc,
            poll_interval: Duration::from_millis(config::constants::CONFIRM_POLL_INTERVAL_MS),
        }
    }

    /// The underlying RPC handle, shareable with a wallet adapter.
    pub fn client(&self) -> Arc<RpcClient> {
        Arc::clone(&self.rpc)
    }
}

impl ChainRpc for SolanaRpc {
    async fn rent_exempt_minimum(&self, space: usize) -> Result<u64, SdkError> {
        Ok(self.rpc.get_minimum_balance_for_rent_exemption(space).await?)
    }

    async fn latest_blockhash(&self) -> Result<(Hash, u64), SdkError> {
        Ok(self
            .rpc
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .await?)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        last_valid_block_height: u64,
    ) -> Result<(), SdkError> {
        loop {
            let statuses = self.rpc.get_signature_statuses(&[*signature]).await?;

            if let Some(Some(status)) = statuses.value.into_iter().next() {
                if let Some(error) = status.err {
                    return Err(SdkError::TransactionFailed {
                        signature: *signature,
                        error,
                    });
                }
                if status.satisfies_commitment(CommitmentConfig::confirmed()) {
                    debug!(%signature, "transaction confirmed");
                    return Ok(());
                }
            }

            // The blockhash bounds how long the submission stays valid.
            let height = self.rpc.get_block_height().await?;
            if height > last_valid_block_height {
                return Err(SdkError::BlockhashExpired(*signature));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, SdkError> {
        let account = self
            .rpc
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .await?;
        Ok(account.value.is_some())
    }
}
