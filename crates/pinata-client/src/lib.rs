//! Functional utilities for interacting with the Pinata pinning API.
//!
//! [`PinataClient`] uploads a payload -- a structured JSON object or a raw
//! file -- to the pinning endpoint via one multipart POST carrying the two
//! Pinata credential headers, and resolves the reported content hash to a
//! public gateway URL.
//!
//! Unlike the transaction orchestrator, this client has **no retry logic**:
//! a non-success HTTP status fails immediately with the received status
//! code attached.

mod metadata;

pub use metadata::TokenMetadata;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error};

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// A payload to pin.
///
/// Structured values are serialized to JSON and wrapped as a named
/// synthetic file; raw files are attached as-is.
pub enum UploadPayload {
    /// A JSON document, uploaded under the given file name.
    Json {
        file_name: String,
        value: serde_json::Value,
    },
    /// Raw file contents, uploaded under the given file name.
    File {
        file_name: String,
        content: Vec<u8>,
    },
}

impl UploadPayload {
    /// A JSON payload under the conventional `metadata.json` name.
    pub fn metadata_json(value: serde_json::Value) -> Self {
        Self::Json {
            file_name: "metadata.json".to_string(),
            value,
        }
    }

    /// The file name the payload is uploaded under.
    pub fn file_name(&self) -> &str {
        match self {
            Self::Json { file_name, .. } | Self::File { file_name, .. } => file_name,
        }
    }

    /// Convert into the multipart `file` part.
    fn into_part(self) -> Result<Part, PinataError> {
        match self {
            Self::Json { file_name, value } => {
                let json = serde_json::to_string(&value)?;
                Ok(Part::text(json)
                    .file_name(file_name)
                    .mime_str("application/json")?)
            }
            Self::File { file_name, content } => Ok(Part::bytes(content).file_name(file_name)),
        }
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body from a successful pin.
#[derive(Debug, Clone, Deserialize)]
pub struct PinResponse {
    /// Content-addressed identifier of the pinned payload.
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,

    /// Size of the pinned content in bytes.
    #[serde(rename = "PinSize")]
    pub pin_size: Option<u64>,

    /// Server-side pin timestamp (RFC 3339).
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
}

impl PinResponse {
    /// The public gateway URL for the pinned content.
    pub fn gateway_url(&self) -> String {
        gateway_url(&self.ipfs_hash)
    }
}

/// Compose a public gateway URL from a content hash.
pub fn gateway_url(ipfs_hash: &str) -> String {
    format!("{}/{}", config::constants::PINATA_GATEWAY_BASE, ipfs_hash)
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors that can occur when interacting with the Pinata API.
#[derive(Debug, thiserror::Error)]
pub enum PinataError {
    /// The pinning endpoint returned a non-success status.
    #[error("Pinata API error: status={status} body={body}")]
    Api {
        /// The status code of the response.
        status: StatusCode,
        /// The body of the response.
        body: String,
    },

    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("Pinata request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The payload could not be serialized to JSON.
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the Pinata pinning API.
pub struct PinataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    secret_api_key: String,
}

impl PinataClient {
    /// Creates a client against the public Pinata endpoint.
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self::with_base_url(config::constants::PINATA_API_BASE, api_key, secret_api_key)
    }

    /// Creates a client against a custom endpoint (local gateways, tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    /// Pin a payload and return the parsed response body.
    pub async fn pin(&self, payload: UploadPayload) -> Result<PinResponse, PinataError> {
        let url = format!("{}/pinning/pinFileToIPFS", self.base_url);
        let file_name = payload.file_name().to_string();
        let form = Form::new().part("file", payload.into_part()?);

        debug!(url = %url, file_name = %file_name, "pinata_upload_start");

        let response = self
            .http
            .post(&url)
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "pinata_upload_rejected");
            return Err(PinataError::Api { status, body });
        }

        let pinned = response.json::<PinResponse>().await?;
        debug!(ipfs_hash = %pinned.ipfs_hash, "pinata_upload_pinned");
        Ok(pinned)
    }

    /// Pin a payload and return its public gateway URL.
    pub async fn upload(&self, payload: UploadPayload) -> Result<String, PinataError> {
        let pinned = self.pin(payload).await?;
        Ok(pinned.gateway_url())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
