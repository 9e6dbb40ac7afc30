//! Image → metadata → mint orchestration.
//!
//! # Data Flow
//! ```text
//! SessionConfig + MintRequest
//!     → validate (no network I/O)
//!     → pin image           → image hash
//!     → build + pin metadata → metadata hash → token URI
//!     → mint                 → tx hash
//!     → MintReceipt (links)
//! ```
//!
//! Each stage runs only when the previous one succeeded. Nothing is retried;
//! re-submitting pins the image and metadata again.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use alloy::primitives::Address;
use serde::Serialize;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::wallet::{parse_address, resolve_recipient};
use crate::blockchain::{ChainConnector, ChainError, Minter, Wallet};
use crate::metadata::{build_metadata, Attribute, MAX_ATTRIBUTES};
use crate::network::{NetworkProfile, NetworkRegistry};
use crate::observability::metrics;
use crate::pinning::{PinError, PinataClient};
use crate::session::{SessionConfig, SessionError};

/// Accepted image file extensions, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// User-supplied image.
#[derive(Debug, Clone)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// What the user asked to mint.
#[derive(Debug, Clone, Default)]
pub struct MintRequest {
    pub image: Option<Asset>,
    pub name: String,
    pub description: String,
    /// Blank or absent mints to the signer.
    pub recipient: Option<String>,
    pub attributes: Vec<Attribute>,
}

/// Why a mint did not complete.
#[derive(Debug, Error)]
pub enum MintError {
    /// Bad or missing input; nothing was sent anywhere.
    #[error("{0}")]
    Config(#[from] SessionError),

    /// Pinning failed; no mint was attempted.
    #[error(transparent)]
    Upload(#[from] PinError),

    /// The mint itself failed.
    #[error("Minting error: {0}")]
    Chain(#[from] ChainError),
}

impl MintError {
    pub fn kind(&self) -> &'static str {
        match self {
            MintError::Config(_) => "config",
            MintError::Upload(_) => "upload",
            MintError::Chain(_) => "chain",
        }
    }
}

/// Everything shown to the user after a successful mint.
#[derive(Debug, Clone, Serialize)]
pub struct MintReceipt {
    pub mint_id: Uuid,
    pub tx_hash: String,
    pub token_uri: String,
    pub image_hash: String,
    pub metadata_hash: String,
    pub recipient: String,
    pub contract: String,
    pub network: String,
    pub gas_limit: u64,
    pub gas_fallback: bool,
    pub explorer_link: String,
    pub marketplace_link: String,
    pub image_link: String,
}

/// Input that passed every local check.
struct Validated<'a> {
    network: &'a NetworkProfile,
    contract: Address,
    recipient: Address,
}

/// Runs mints against the pinning service and the selected network.
pub struct MintPipeline {
    pinata: PinataClient,
    networks: NetworkRegistry,
    connector: Arc<dyn ChainConnector>,
}

impl MintPipeline {
    pub fn new(pinata: PinataClient, networks: NetworkRegistry, connector: Arc<dyn ChainConnector>) -> Self {
        Self {
            pinata,
            networks,
            connector,
        }
    }

    pub fn networks(&self) -> &NetworkRegistry {
        &self.networks
    }

    /// Validate, pin, and mint.
    pub async fn run(&self, session: &SessionConfig, request: MintRequest) -> Result<MintReceipt, MintError> {
        let mint_id = Uuid::new_v4();
        let start = Instant::now();
        let span = tracing::info_span!("mint", %mint_id, network = %session.network);

        let result = self.execute(mint_id, session, request).instrument(span).await;

        let network = self
            .networks
            .resolve(&session.network)
            .map(|n| n.name.as_str())
            .unwrap_or("unknown");
        metrics::record_mint(network, result.is_ok(), start);

        if let Err(e) = &result {
            tracing::error!(%mint_id, kind = e.kind(), error = %e, "Mint failed");
        }
        result
    }

    async fn execute(
        &self,
        mint_id: Uuid,
        session: &SessionConfig,
        request: MintRequest,
    ) -> Result<MintReceipt, MintError> {
        let validated = self.validate(session, &request)?;
        let network = validated.network;
        let credentials = session.pinning_credentials();

        let MintRequest {
            image,
            name,
            description,
            attributes,
            ..
        } = request;
        let image = image.ok_or(SessionError::MissingImage)?;

        tracing::info!(filename = %image.filename, bytes = image.bytes.len(), "Uploading image");
        let image_hash = self
            .pinata
            .pin_file(&credentials, image.bytes, &image.filename)
            .await?;

        let metadata = build_metadata(&name, &description, &image_hash, attributes);
        let metadata_hash = self.pinata.pin_json(&credentials, &metadata).await?;
        let token_uri = format!("ipfs://{}", metadata_hash);

        let chain = self.connector.connect(network)?;
        let recipient = validated.recipient.to_checksum(None);
        let outcome = Minter::new(chain.as_ref(), network)
            .mint(session, Some(&recipient), &token_uri)
            .await?;

        let contract = validated.contract.to_checksum(None);
        let tx_hex = alloy::hex::encode(outcome.tx_hash);

        tracing::info!(tx_hash = %outcome.tx_hash, token_uri = %token_uri, "NFT created");

        Ok(MintReceipt {
            mint_id,
            tx_hash: format!("0x{}", tx_hex),
            explorer_link: network.tx_link(&tx_hex),
            marketplace_link: network.marketplace_link(&contract),
            image_link: self.pinata.gateway_link(&image_hash),
            token_uri,
            image_hash,
            metadata_hash,
            recipient,
            contract,
            network: network.name.clone(),
            gas_limit: outcome.gas_limit,
            gas_fallback: outcome.gas_fallback,
        })
    }

    /// Every check that can fail without touching the network.
    fn validate<'a>(&'a self, session: &SessionConfig, request: &MintRequest) -> Result<Validated<'a>, SessionError> {
        session.validate()?;

        let network = self
            .networks
            .resolve(&session.network)
            .ok_or_else(|| SessionError::UnknownNetwork(session.network.clone()))?;

        match &request.image {
            Some(image) if !image.bytes.is_empty() => {
                if !is_supported_image(&image.filename) {
                    return Err(SessionError::UnsupportedImage(image.filename.clone()));
                }
            }
            _ => return Err(SessionError::MissingImage),
        }

        let mut missing = Vec::new();
        if request.name.trim().is_empty() {
            missing.push("name");
        }
        if request.description.trim().is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(SessionError::MissingFields(missing));
        }

        if request.attributes.len() > MAX_ATTRIBUTES {
            return Err(SessionError::TooManyAttributes {
                count: request.attributes.len(),
                max: MAX_ATTRIBUTES,
            });
        }

        let wallet = Wallet::from_private_key(&session.private_key, network.chain_id)
            .map_err(|e| SessionError::InvalidKey(e.to_string()))?;
        let contract = parse_address("contract", &session.contract_address).map_err(address_error)?;
        let recipient = resolve_recipient(&wallet, request.recipient.as_deref()).map_err(address_error)?;

        if request.recipient.as_deref().is_none_or(|r| r.trim().is_empty()) {
            tracing::info!(recipient = %recipient, "No recipient given, minting to signer");
        }

        Ok(Validated {
            network,
            contract,
            recipient,
        })
    }
}

fn is_supported_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn address_error(e: ChainError) -> SessionError {
    match e {
        ChainError::InvalidAddress { field, value } => SessionError::InvalidAddress { field, value },
        other => SessionError::InvalidKey(other.to_string()),
    }
}
