//! Token launcher: pins the metadata document, then launches the token.
//!
//! Uploads the off-chain metadata JSON to Pinata, launches a new SPL token
//! pointing at the pinned URI, and logs the resulting addresses.
//!
//! # Configuration
//!
//! Credentials and token fields come from the environment:
//!
//! ```bash
//! export SIGNER_KEYPAIR_PATH=~/.config/solana/id.json
//! export PINATA_API_KEY=...
//! export PINATA_SECRET_API_KEY=...
//! export TOKEN_NAME="Example Token" TOKEN_SYMBOL=EXM
//! RUST_LOG=info cargo run --release -p token-launcher
//! ```

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use solana_sdk::signature::read_keypair_file;
use tracing_subscriber::EnvFilter;

use config::NetworkConfig;
use pinata_client::{PinataClient, TokenMetadata};
use sdk::chain::SolanaRpc;
use sdk::progress::TracingSink;
use sdk::{LaunchTokenParams, Sdk, SdkConfig};
use wallet::KeypairWallet;

const NETWORK: NetworkConfig = NetworkConfig::DEVNET;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("token-launcher starting");

    // -----------------------------------------------------------------------
    // Wallet setup
    // -----------------------------------------------------------------------

    let keypair_path = env_or("SIGNER_KEYPAIR_PATH", &default_keypair_path());
    let payer = read_keypair_file(&keypair_path)
        .unwrap_or_else(|e| panic!("failed to read keypair from {keypair_path}: {e}"));

    let chain = SolanaRpc::new(&NETWORK);
    let wallet = KeypairWallet::new(payer, chain.client());
    tracing::info!(network = %NETWORK.network, "wallet ready");

    // -----------------------------------------------------------------------
    // Metadata upload
    // -----------------------------------------------------------------------

    let pinata = PinataClient::new(
        require_env("PINATA_API_KEY"),
        require_env("PINATA_SECRET_API_KEY"),
    );

    let metadata = TokenMetadata {
        name: env_or("TOKEN_NAME", "Example Token"),
        symbol: env_or("TOKEN_SYMBOL", "EXM"),
        description: env_or("TOKEN_DESCRIPTION", ""),
        image: env_or("TOKEN_IMAGE", ""),
    };
    let name = metadata.name.clone();
    let symbol = metadata.symbol.clone();

    let payload = metadata.into_payload().expect("metadata serializes");
    let metadata_uri = pinata.upload(payload).await.expect("metadata upload");
    tracing::info!(%metadata_uri, "metadata pinned");

    // -----------------------------------------------------------------------
    // Launch
    // -----------------------------------------------------------------------

    let sdk = Sdk::new(SdkConfig::new(NETWORK), chain);
    sdk.set_status_sink(Arc::new(TracingSink));

    let params = LaunchTokenParams {
        name,
        symbol,
        decimals: parse_env("TOKEN_DECIMALS", 9),
        initial_supply: parse_env("INITIAL_SUPPLY", 1_000_000),
        sample_amount: None,
        freeze_authority: true,
        is_mutable: true,
        metadata_uri,
        recipient: None,
    };

    let result = sdk.launch_token(&wallet, &params).await.expect("token launch");

    tracing::info!(mint = %result.mint, "mint address");
    tracing::info!(metadata = %result.metadata, "metadata address");
    tracing::info!(signature = %result.signature, "final transaction");
    tracing::info!(url = %result.explorer_url, "explorer");
}

// ---------------------------------------------------------------------------
// Env helpers
// ---------------------------------------------------------------------------

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} must be set"))
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{key} is not a valid value")),
        Err(_) => default,
    }
}

fn default_keypair_path() -> String {
    format!(
        "{}/.config/solana/id.json",
        env::var("HOME").unwrap_or_default()
    )
}
