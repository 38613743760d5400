//! Token launch SDK: drives a wallet capability to mint an SPL token with
//! on-chain metadata.
//!
//! The SDK orchestrates launches by combining:
//! - **Chain RPC** ([`chain::ChainRpc`]) for rent, blockhash, confirmation,
//!   and account queries
//! - **Wallet capability** ([`wallet::WalletAdapter`]) for countersigning
//!   and submission, supplied per call
//! - **Progress sink** ([`progress::StatusSink`]) for informational stage
//!   updates
//! - **Bounded retry** ([`retry::RetryPolicy`]) for rate-limited errors
//!
//! # Usage
//!
//! ```no_run
//! use config::{Network, NetworkConfig};
//! use sdk::chain::SolanaRpc;
//! use sdk::{LaunchTokenParams, Sdk, SdkConfig};
//! use solana_sdk::signature::Keypair;
//! use wallet::KeypairWallet;
//!
//! # async fn example() -> Result<(), sdk::SdkError> {
//! let network = NetworkConfig::for_network(Network::Devnet);
//! let chain = SolanaRpc::new(&network);
//! let wallet = KeypairWallet::new(Keypair::new(), chain.client());
//!
//! let sdk = Sdk::new(SdkConfig::new(network), chain);
//! let params = LaunchTokenParams {
//!     name: "Example".into(),
//!     symbol: "EXM".into(),
//!     decimals: 9,
//!     initial_supply: 1_000_000,
//!     sample_amount: None,
//!     freeze_authority: true,
//!     is_mutable: true,
//!     metadata_uri: "https://gateway.pinata.cloud/ipfs/QmHash".into(),
//!     recipient: None,
//! };
//! let result = sdk.launch_token(&wallet, &params).await?;
//! println!("minted {} -> {}", result.mint, result.explorer_url);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod error;
pub mod instructions;
pub mod operations;
pub mod progress;
pub mod retry;

pub use error::SdkError;
pub use operations::launch::{LaunchTokenParams, LaunchTokenResult};
pub use operations::mint::{MintSupplyParams, MintSupplyResult};

use std::sync::{Arc, RwLock};

use config::NetworkConfig;

use crate::chain::ChainRpc;
use crate::progress::{LaunchStage, NoopSink, StatusSink};
use crate::retry::RetryPolicy;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How launch instructions are split across submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// One transaction carrying the whole sequence.
    #[default]
    Single,
    /// Three independently-confirmed transactions (create+init, metadata,
    /// fund) for clusters where a single submission would exceed size or
    /// compute limits.
    Split,
}

/// SDK configuration.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Cluster endpoints and explorer links.
    pub network: NetworkConfig,
    /// Retry policy for rate-limited errors. Defaults to 3 attempts with
    /// linear backoff (1s base, 10s cap).
    pub retry_policy: RetryPolicy,
    /// Submission strategy for the launch sequence.
    pub submit_mode: SubmitMode,
}

impl SdkConfig {
    /// Configuration with the default retry policy and submit mode.
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            network,
            retry_policy: RetryPolicy::default(),
            submit_mode: SubmitMode::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sdk
// ---------------------------------------------------------------------------

/// Shared state across all SDK operations.
pub(crate) struct SdkInner<C> {
    pub config: SdkConfig,
    pub chain: C,
    pub status: RwLock<Arc<dyn StatusSink>>,
}

/// The token launch SDK entry point.
///
/// `Clone`-able (wraps an `Arc<SdkInner>`). The chain RPC surface is a
/// trait so tests run hermetically; the wallet capability is an explicit
/// parameter on every operation.
pub struct Sdk<C> {
    pub(crate) inner: Arc<SdkInner<C>>,
}

// Manual Clone: we don't require C to be Clone.
impl<C> Clone for Sdk<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> std::fmt::Debug for Sdk<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdk")
            .field("network", &self.inner.config.network.network)
            .finish()
    }
}

impl<C: ChainRpc> Sdk<C> {
    /// Creates a new SDK instance. No network I/O happens during
    /// construction.
    pub fn new(config: SdkConfig, chain: C) -> Self {
        Self {
            inner: Arc::new(SdkInner {
                config,
                chain,
                status: RwLock::new(Arc::new(NoopSink)),
            }),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &SdkConfig {
        &self.inner.config
    }

    /// Replace the status sink at runtime.
    ///
    /// Use [`progress::TracingSink`] to feed the log stream, or implement
    /// [`StatusSink`] to feed a UI.
    pub fn set_status_sink(&self, sink: Arc<dyn StatusSink>) {
        *self.inner.status.write().unwrap() = sink;
    }

    /// The chain RPC handle.
    pub(crate) fn chain(&self) -> &C {
        &self.inner.chain
    }

    /// The configured retry policy.
    pub(crate) fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.config.retry_policy
    }

    /// The configured submission strategy.
    pub(crate) fn submit_mode(&self) -> SubmitMode {
        self.inner.config.submit_mode
    }

    /// Emit a stage update to the current sink.
    ///
    /// Informational only -- sinks return nothing and cannot affect
    /// control flow. The read lock is held only long enough to clone the
    /// `Arc`.
    pub(crate) fn status(&self, stage: &LaunchStage) {
        let sink = self.inner.status.read().unwrap().clone();
        sink.update(stage);
    }
}
