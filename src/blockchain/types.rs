//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Liveness check failed.
    #[error("unable to connect to {network}: {reason}")]
    Unreachable { network: String, reason: String },

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Address did not parse.
    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    /// Local signing failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Node refused the signed transaction.
    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// What the minter hands back after a successful broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    pub tx_hash: TxHash,
    pub explorer_url: String,
    pub nonce: u64,
    pub gas_limit: u64,
    /// True when the estimate failed and the default limit was used.
    pub gas_fallback: bool,
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}
