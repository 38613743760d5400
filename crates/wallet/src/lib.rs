//! Wallet capability abstractions for the token launch SDK.
//!
//! This crate provides:
//!
//! - [`WalletAdapter`] trait -- the capability surface the orchestrator
//!   consumes: presence check, public-key accessor, and a combined
//!   sign-and-submit operation
//! - [`KeypairWallet`] -- a concrete adapter backed by a local [`Keypair`]
//!   that countersigns as fee payer and submits through an RPC handle
//!
//! # Design
//!
//! The orchestrator never holds a wallet; the capability is an explicit
//! parameter supplied by the caller on each call. A browser-extension or
//! hardware wallet integration implements [`WalletAdapter`] the same way
//! [`KeypairWallet`] does: receive a transaction whose recent blockhash and
//! partial signatures are already in place, add the fee-payer signature,
//! and submit it.
//!
//! Confirmation is deliberately *not* part of the surface -- the adapter
//! returns as soon as the transaction is accepted for processing, and the
//! orchestrator polls for confirmation itself.

mod keypair;

pub use keypair::KeypairWallet;

use std::future::Future;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

// ---------------------------------------------------------------------------
// WalletError
// ---------------------------------------------------------------------------

/// Errors from a wallet adapter.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The adapter is not connected to a usable key.
    #[error("wallet is not connected")]
    NotConnected,

    /// Adding the fee-payer signature failed.
    #[error("wallet signing failed: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    /// The RPC node rejected the submission.
    #[error("transaction submission failed: {0}")]
    Submission(#[from] solana_client::client_error::ClientError),

    /// The user (or policy layer) declined to sign.
    #[error("wallet rejected the transaction: {0}")]
    Rejected(String),
}

// ---------------------------------------------------------------------------
// WalletAdapter
// ---------------------------------------------------------------------------

/// Signing-and-submission capability for the launch flow.
///
/// Implementations own key custody entirely; consumers only see the public
/// key and the submitted signature.
pub trait WalletAdapter: Send + Sync {
    /// Whether the wallet is present and ready to sign.
    ///
    /// Orchestration entry points check this before any network call and
    /// fail fast when it reports `false`.
    fn is_connected(&self) -> bool;

    /// The wallet's public key, used as fee payer and authority.
    fn pubkey(&self) -> Pubkey;

    /// Countersign `transaction` as fee payer and submit it.
    ///
    /// The transaction arrives with its recent blockhash set and any
    /// additional signatures (e.g. the mint keypair) already applied.
    /// Returns the transaction signature without waiting for confirmation.
    fn sign_and_send(
        &self,
        transaction: Transaction,
    ) -> impl Future<Output = Result<Signature, WalletError>> + Send;
}
