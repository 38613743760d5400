//! Local keypair wallet adapter.

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::{WalletAdapter, WalletError};

/// Wallet adapter backed by a local [`Keypair`].
///
/// Signs as fee payer and submits through the given RPC handle. Suitable
/// for server-side flows and CLI tools where the key material is on disk;
/// interactive wallets implement [`WalletAdapter`] directly instead.
pub struct KeypairWallet {
    keypair: Keypair,
    rpc: Arc<RpcClient>,
}

impl KeypairWallet {
    /// Creates an adapter from a keypair and an RPC handle.
    pub fn new(keypair: Keypair, rpc: Arc<RpcClient>) -> Self {
        Self { keypair, rpc }
    }
}

impl WalletAdapter for KeypairWallet {
    fn is_connected(&self) -> bool {
        true
    }

    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn sign_and_send(&self, transaction: Transaction) -> Result<Signature, WalletError> {
        let mut transaction = transaction;
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_partial_sign(&[&self.keypair], blockhash)?;

        let signature = self.rpc.send_transaction(&transaction).await?;
        debug!(%signature, "transaction submitted");
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wallet() -> KeypairWallet {
        let rpc = Arc::new(RpcClient::new("http://127.0.0.1:8899".to_string()));
        KeypairWallet::new(Keypair::new(), rpc)
    }

    #[test]
    fn reports_connected() {
        assert!(test_wallet().is_connected());
    }

    #[test]
    fn pubkey_matches_keypair() {
        let rpc = Arc::new(RpcClient::new("http://127.0.0.1:8899".to_string()));
        let keypair = Keypair::new();
        let expected = keypair.pubkey();
        let wallet = KeypairWallet::new(keypair, rpc);
        assert_eq!(wallet.pubkey(), expected);
    }

    #[test]
    fn distinct_wallets_have_distinct_keys() {
        assert_ne!(test_wallet().pubkey(), test_wallet().pubkey());
    }
}
