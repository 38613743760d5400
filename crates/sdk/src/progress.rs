//! Progress reporting: informational stage updates for launch operations.
//!
//! Operations emit a [`LaunchStage`] at each major step through the SDK's
//! configured [`StatusSink`]. Sinks are informational only -- they return
//! nothing and can never affect control flow.
//!
//! The sink is pluggable at runtime: [`NoopSink`] is the zero-cost default,
//! [`TracingSink`] forwards to the log stream, and [`RecordingSink`] keeps
//! rendered updates in memory for tests and observability.

use std::fmt;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// LaunchStage
// ---------------------------------------------------------------------------

/// A major step in a launch or mint operation.
///
/// `Display` renders the user-facing progress strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchStage {
    /// Generating the mint keypair and creating the mint account.
    CreatingMint,
    /// Creating the on-chain metadata record.
    CreatingMetadata,
    /// Creating the associated token account and minting supply.
    MintingSupply,
    /// Waiting for a submission to confirm.
    Confirming,
    /// Checking the mint account exists after submission.
    Verifying,
    /// A rate-limited attempt is being retried.
    Retrying { attempt: u32, max_attempts: u32 },
    /// The launch completed.
    Complete,
    /// A supply mint completed.
    SupplyMinted,
}

impl fmt::Display for LaunchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatingMint => write!(f, "Creating mint account..."),
            Self::CreatingMetadata => write!(f, "Creating metadata..."),
            Self::MintingSupply => write!(f, "Creating token account and minting..."),
            Self::Confirming => write!(f, "Confirming transaction..."),
            Self::Verifying => write!(f, "Verifying token..."),
            Self::Retrying {
                attempt,
                max_attempts,
            } => write!(f, "Rate limit reached. Retrying ({attempt}/{max_attempts})..."),
            Self::Complete => write!(f, "Token created successfully!"),
            Self::SupplyMinted => write!(f, "Tokens minted successfully!"),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusSink
// ---------------------------------------------------------------------------

/// Informational sink for stage updates.
///
/// Implementations must be `Send + Sync`; the SDK calls `update` from the
/// operation's own task. There is no return contract.
pub trait StatusSink: Send + Sync {
    /// Receive a stage update.
    fn update(&self, stage: &LaunchStage);
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// Discards all updates. The default sink.
pub struct NoopSink;

impl StatusSink for NoopSink {
    #[inline]
    fn update(&self, _stage: &LaunchStage) {}
}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// Forwards rendered updates to `tracing` at info level.
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn update(&self, stage: &LaunchStage) {
        tracing::info!("{stage}");
    }
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// Records rendered updates in memory, in arrival order.
pub struct RecordingSink {
    updates: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every update received so far.
    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for RecordingSink {
    fn update(&self, stage: &LaunchStage) {
        self.updates.lock().unwrap().push(stage.to_string());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
