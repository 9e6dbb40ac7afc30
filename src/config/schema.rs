//! Configuration schema definitions.
//!
//! Service-wide settings only. Per-user settings (keys, credentials, contract
//! address) live in [`crate::session::SessionConfig`] and never appear here.

use serde::{Deserialize, Serialize};

/// Root configuration for the minting service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Pinning service endpoints.
    pub pinning: PinningConfig,

    /// Blockchain RPC settings.
    pub chain: ChainConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Time allowed for requests other than `/api/mint`. Mints are bounded
    /// by the pinning and RPC timeouts instead.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes (image upload included).
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// Pinning service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PinningConfig {
    /// Base URL of the pinning API.
    pub api_url: String,

    /// Public gateway used to build image links.
    pub gateway_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PinningConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.pinata.cloud".to_string(),
            gateway_url: "https://gateway.pinata.cloud/ipfs".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Blockchain integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Replacement RPC URL for the mainnet preset.
    pub mainnet_rpc_url: Option<String>,

    /// Replacement RPC URL for the testnet preset.
    pub testnet_rpc_url: Option<String>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_timeout_secs: 30,
            mainnet_rpc_url: None,
            testnet_rpc_url: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
