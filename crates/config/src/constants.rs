//! Launch-flow constants.
//!
//! These constants define client-side parameters for retries, confirmation
//! polling, and the pinning service endpoints.

/// Maximum number of attempts for a rate-limited operation (including the
/// first try).
pub const MAX_ATTEMPTS: u32 = 3;

/// Base delay before the first retry, in milliseconds.
///
/// The delay for attempt `n` is `n * RETRY_BASE_DELAY_MS`.
pub const RETRY_BASE_DELAY_MS: u64 = 1_000;

/// Cap on the delay between retries, in milliseconds.
pub const RETRY_MAX_DELAY_MS: u64 = 10_000;

/// Interval between confirmation-status polls, in milliseconds.
pub const CONFIRM_POLL_INTERVAL_MS: u64 = 500;

/// Default sample mint amount, in whole tokens.
///
/// Minted alongside the initial supply when it differs from it. Callers can
/// override this per launch.
pub const DEFAULT_SAMPLE_AMOUNT: u64 = 1_000;

/// Base URL of the Pinata pinning API.
pub const PINATA_API_BASE: &str = "https://api.pinata.cloud";

/// Base URL of the public Pinata IPFS gateway.
pub const PINATA_GATEWAY_BASE: &str = "https://gateway.pinata.cloud/ipfs";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_delays_stay_under_cap() {
        // Every delay the policy can produce with MAX_ATTEMPTS must fit
        // under the cap.
        for attempt in 1..=MAX_ATTEMPTS as u64 {
            assert!(attempt * RETRY_BASE_DELAY_MS <= RETRY_MAX_DELAY_MS);
        }
    }

    #[test]
    fn gateway_base_has_no_trailing_slash() {
        assert!(!PINATA_GATEWAY_BASE.ends_with('/'));
        assert!(!PINATA_API_BASE.ends_with('/'));
    }
}
