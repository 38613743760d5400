//! Solana network configuration.
//!
//! This crate provides static, per-cluster configuration for the token
//! launch SDK:
//!
//! - [`Network`] -- the Solana cluster to operate against
//! - [`NetworkConfig`] -- RPC endpoint and explorer links for a cluster
//! - [`constants`] -- client-side parameters (retry ceiling, poll interval,
//!   pinning endpoints)
//!
//! All data is compile-time constant (`&'static str` endpoints). Zero heap
//! allocations except when composing explorer URLs. Types are `Copy`, and
//! the crate has no dependencies, so it can be used freely as a leaf.

pub mod constants;

use std::fmt;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// A Solana cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Devnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Devnet => write!(f, "devnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

// ---------------------------------------------------------------------------
// NetworkConfig
// ---------------------------------------------------------------------------

/// Cluster-specific configuration.
///
/// This is `Copy` -- just pointers to static data. The explorer link is
/// composed on demand from the mint address.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    /// The cluster this configuration is for.
    pub network: Network,

    /// Public JSON-RPC endpoint for the cluster.
    pub rpc_url: &'static str,

    /// Query-string suffix appended to explorer links (empty on mainnet).
    explorer_suffix: &'static str,
}

impl NetworkConfig {
    /// Get the configuration for a specific cluster.
    pub const fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET,
            Network::Devnet => Self::DEVNET,
            Network::Testnet => Self::TESTNET,
        }
    }

    /// Compose the Solscan explorer link for a token mint address.
    pub fn token_url(&self, mint: &str) -> String {
        format!("https://solscan.io/token/{}{}", mint, self.explorer_suffix)
    }

    // -----------------------------------------------------------------------
    // Built-in cluster configurations
    // -----------------------------------------------------------------------

    /// Production mainnet-beta configuration.
    pub const MAINNET: Self = Self {
        network: Network::Mainnet,
        rpc_url: "https://api.mainnet-beta.solana.com",
        explorer_suffix: "",
    };

    /// Devnet configuration.
    pub const DEVNET: Self = Self {
        network: Network::Devnet,
        rpc_url: "https://api.devnet.solana.com",
        explorer_suffix: "?cluster=devnet",
    };

    /// Testnet configuration.
    pub const TESTNET: Self = Self {
        network: Network::Testnet,
        rpc_url: "https://api.testnet.solana.com",
        explorer_suffix: "?cluster=testnet",
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_config() {
        let config = NetworkConfig::for_network(Network::Mainnet);
        assert_eq!(config.rpc_url, "https://api.mainnet-beta.solana.com");
        assert_eq!(
            config.token_url("So11111111111111111111111111111111111111112"),
            "https://solscan.io/token/So11111111111111111111111111111111111111112"
        );
    }

    #[test]
    fn devnet_token_url_carries_cluster() {
        let config = NetworkConfig::DEVNET;
        let url = config.token_url("MintAddr");
        assert!(url.starts_with("https://solscan.io/token/MintAddr"));
        assert!(url.ends_with("?cluster=devnet"));
    }

    #[test]
    fn rpc_urls_are_https() {
        for network in [Network::Mainnet, Network::Devnet, Network::Testnet] {
            let config = NetworkConfig::for_network(network);
            assert!(
                config.rpc_url.starts_with("https://"),
                "{network} RPC endpoint should use HTTPS"
            );
        }
    }

    #[test]
    fn configs_are_copy() {
        let a = NetworkConfig::DEVNET;
        let b = a;
        assert_eq!(a.rpc_url, b.rpc_url);
    }

    #[test]
    fn const_fn_works_at_compile_time() {
        const CONFIG: NetworkConfig = NetworkConfig::for_network(Network::Devnet);
        assert_eq!(CONFIG.network, Network::Devnet);
    }
}
