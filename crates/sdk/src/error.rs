//! SDK error types.
//!
//! [`SdkError`] is the unified error type for all SDK operations. Remote
//! rejections keep their underlying payloads (RPC error, wallet error,
//! on-chain transaction error) so callers can surface them unmodified.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::TransactionError;

// ---------------------------------------------------------------------------
// SdkError
// ---------------------------------------------------------------------------

/// Errors from SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// No connected wallet capability was supplied.
    #[error("wallet not found")]
    WalletNotFound,

    /// The RPC node rejected a request.
    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// The wallet failed to sign or submit.
    #[error(transparent)]
    Wallet(#[from] wallet::WalletError),

    /// Signing with the mint keypair failed.
    #[error("signing failed: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    /// A confirmation response carried a non-null error field.
    #[error("transaction {signature} failed on chain: {error}")]
    TransactionFailed {
        signature: Signature,
        error: TransactionError,
    },

    /// The blockhash validity window elapsed before confirmation.
    #[error("blockhash expired before {0} was confirmed")]
    BlockhashExpired(Signature),

    /// The created account was absent in the post-submission check.
    #[error("account {0} not found after creation")]
    AccountMissing(Pubkey),

    /// An instruction builder rejected its inputs.
    #[error("instruction build failed: {0}")]
    Instruction(#[from] solana_program::program_error::ProgramError),
}

impl SdkError {
    /// Returns `true` when the error text carries a rate-limit marker
    /// (HTTP 429 semantics). Only these errors are retried.
    pub fn is_rate_limited(&self) -> bool {
        let text = match self {
            Self::Rpc(e) => e.to_string(),
            Self::Wallet(e) => e.to_string(),
            _ => return false,
        };
        text.contains("429") || text.contains("Too Many Requests")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use solana_client::client_error::{ClientError, ClientErrorKind};

    fn rpc_error(message: &str) -> SdkError {
        SdkError::Rpc(ClientError::from(ClientErrorKind::Custom(
            message.to_string(),
        )))
    }

    #[test]
    fn rate_limit_detected_in_rpc_error() {
        assert!(rpc_error("HTTP status client error (429 Too Many Requests)").is_rate_limited());
        assert!(rpc_error("429").is_rate_limited());
    }

    #[test]
    fn rate_limit_detected_in_wallet_error() {
        let err = SdkError::Wallet(wallet::WalletError::Rejected(
            "node returned 429".to_string(),
        ));
        assert!(err.is_rate_limited());
    }

    #[test]
    fn other_errors_are_not_rate_limited() {
        assert!(!rpc_error("connection refused").is_rate_limited());
        assert!(!SdkError::WalletNotFound.is_rate_limited());
        assert!(!SdkError::AccountMissing(Pubkey::new_unique()).is_rate_limited());
    }

    #[test]
    fn wallet_not_found_display() {
        assert_eq!(SdkError::WalletNotFound.to_string(), "wallet not found");
    }

    #[test]
    fn transaction_failed_carries_payload() {
        let err = SdkError::TransactionFailed {
            signature: Signature::default(),
            error: TransactionError::InsufficientFundsForFee,
        };
        assert!(err.to_string().contains("failed on chain"));
    }
}
