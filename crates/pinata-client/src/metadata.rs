//! Off-chain token metadata document.

use serde::{Deserialize, Serialize};

/// The JSON document pinned for a token and referenced by its on-chain
/// metadata URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// URL of the token image (often itself a gateway URL).
    pub image: String,
}

impl TokenMetadata {
    /// Serialize into an upload payload under the conventional name.
    pub fn into_payload(self) -> Result<crate::UploadPayload, serde_json::Error> {
        Ok(crate::UploadPayload::metadata_json(serde_json::to_value(
            self,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let metadata = TokenMetadata {
            name: "Example".to_string(),
            symbol: "EXM".to_string(),
            description: "An example token".to_string(),
            image: "https://gateway.pinata.cloud/ipfs/QmLogo".to_string(),
        };
        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: TokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.symbol, "EXM");
    }

    #[test]
    fn payload_carries_all_fields() {
        let metadata = TokenMetadata {
            name: "Example".to_string(),
            symbol: "EXM".to_string(),
            description: "An example token".to_string(),
            image: "ipfs://QmLogo".to_string(),
        };
        let payload = metadata.into_payload().unwrap();
        match payload {
            crate::UploadPayload::Json { file_name, value } => {
                assert_eq!(file_name, "metadata.json");
                assert_eq!(value["name"], "Example");
                assert_eq!(value["image"], "ipfs://QmLogo");
            }
            _ => panic!("expected a JSON payload"),
        }
    }
}
