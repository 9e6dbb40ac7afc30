//! Pinata HTTP client.
//!
//! # Responsibilities
//! - Pin raw files (multipart) and JSON documents
//! - Pass credentials as the `pinata_api_key` / `pinata_secret_api_key` headers
//! - Turn anything but HTTP 200 into an error carrying the service's text
//!
//! No retries: a failed pin aborts the mint and the user re-submits.

use std::time::{Duration, Instant};

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::config::PinningConfig;
use crate::metadata::Metadata;
use crate::observability::metrics;
use crate::pinning::types::{PinError, PinKind, PinResponse, PinResult};
use crate::session::PinningCredentials;

const API_KEY_HEADER: &str = "pinata_api_key";
const SECRET_KEY_HEADER: &str = "pinata_secret_api_key";

/// Client for the pinning API. Holds no credentials.
#[derive(Debug, Clone)]
pub struct PinataClient {
    http: reqwest::Client,
    api_url: String,
    gateway_url: String,
}

impl PinataClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: &PinningConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &PinningConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            gateway_url: config.gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// Pin raw file bytes, returning the content hash.
    pub async fn pin_file(
        &self,
        credentials: &PinningCredentials,
        bytes: Vec<u8>,
        filename: &str,
    ) -> PinResult<String> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let request = self
            .http
            .post(format!("{}/pinning/pinFileToIPFS", self.api_url))
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(SECRET_KEY_HEADER, &credentials.secret_key)
            .multipart(form);

        self.send(PinKind::File, request).await
    }

    /// Pin a metadata document, returning the content hash.
    pub async fn pin_json(
        &self,
        credentials: &PinningCredentials,
        metadata: &Metadata,
    ) -> PinResult<String> {
        let request = self
            .http
            .post(format!("{}/pinning/pinJSONToIPFS", self.api_url))
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(SECRET_KEY_HEADER, &credentials.secret_key)
            .json(metadata);

        self.send(PinKind::Json, request).await
    }

    /// Public gateway URL for a pinned hash.
    pub fn gateway_link(&self, hash: &str) -> String {
        format!("{}/{}", self.gateway_url, hash)
    }

    async fn send(&self, kind: PinKind, request: reqwest::RequestBuilder) -> PinResult<String> {
        let start = Instant::now();
        let result = self.execute(kind, request).await;

        match &result {
            Ok(hash) => tracing::info!(
                kind = kind.as_str(),
                hash = %hash,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Pinned to IPFS"
            ),
            Err(e) => tracing::error!(kind = kind.as_str(), error = %e, "Pinning failed"),
        }
        metrics::record_pin(kind.as_str(), result.is_ok());

        result
    }

    async fn execute(&self, kind: PinKind, request: reqwest::RequestBuilder) -> PinResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| PinError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PinError::Rejected {
                kind: kind.describe(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PinError::Unreachable(e.to_string()))?;
        let parsed: PinResponse = serde_json::from_str(&body)
            .map_err(|e| PinError::MalformedResponse(format!("{}: {}", e, body)))?;

        if parsed.ipfs_hash.is_empty() {
            return Err(PinError::MalformedResponse("empty IpfsHash".to_string()));
        }
        Ok(parsed.ipfs_hash)
    }
}
