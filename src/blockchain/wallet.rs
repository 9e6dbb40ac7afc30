//! Signing key handling.
//!
//! # Security
//! - Keys arrive per request and are dropped with the [`Wallet`]
//! - Keys are never logged or serialized
//! - Transactions are signed in-process; the key never reaches the RPC node

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{ChainError, ChainResult};

/// A signer bound to one chain.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> ChainResult<Self> {
        let trimmed = private_key_hex.trim();
        let key_hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), chain_id, "Wallet loaded");

        Ok(Self { signer, chain_id })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// `0xABCD...WXYZ` form of the checksummed address.
    pub fn short_address(&self) -> String {
        shorten(&self.address().to_checksum(None))
    }

    /// Network wallet used to sign transaction requests.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

fn shorten(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Parse an address field. All-lower or all-upper hex is accepted as is;
/// mixed case must carry a valid EIP-55 checksum.
pub fn parse_address(field: &'static str, value: &str) -> ChainResult<Address> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());

    let parsed = if mixed_case {
        Address::parse_checksummed(trimmed, None).ok()
    } else {
        trimmed.parse::<Address>().ok()
    };

    parsed.ok_or_else(|| ChainError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

/// Recipient for a mint: the given address, or the signer when left blank.
pub fn resolve_recipient(wallet: &Wallet, recipient: Option<&str>) -> ChainResult<Address> {
    match recipient.map(str::trim).filter(|r| !r.is_empty()) {
        Some(address) => parse_address("recipient", address),
        None => Ok(wallet.address()),
    }
}
