//! Base network presets.
//!
//! Exactly two networks are supported. Only the RPC endpoint may be replaced
//! through [`ChainConfig`]; chain id, explorer and marketplace stay fixed.

use serde::Serialize;

use crate::config::ChainConfig;

pub const MAINNET_NAME: &str = "Base Mainnet";
pub const TESTNET_NAME: &str = "Base Sepolia (Testnet)";

/// Connection details for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    /// Display name, also the canonical selector.
    pub name: String,
    /// Short selector accepted alongside the display name.
    pub key: &'static str,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Block explorer base URL.
    pub explorer_url: String,
    /// Marketplace collection base URL.
    pub marketplace_url: String,
}

impl NetworkProfile {
    pub fn base_mainnet() -> Self {
        Self {
            name: MAINNET_NAME.to_string(),
            key: "mainnet",
            rpc_url: "https://mainnet.base.org".to_string(),
            chain_id: 8453,
            explorer_url: "https://basescan.org".to_string(),
            marketplace_url: "https://opensea.io/assets/base".to_string(),
        }
    }

    pub fn base_sepolia() -> Self {
        Self {
            name: TESTNET_NAME.to_string(),
            key: "testnet",
            rpc_url: "https://sepolia.base.org".to_string(),
            chain_id: 84532,
            explorer_url: "https://sepolia.basescan.org".to_string(),
            marketplace_url: "https://testnets.opensea.io/assets/base-sepolia".to_string(),
        }
    }

    /// Explorer page for a transaction, given its hex digest without `0x`.
    pub fn tx_link(&self, tx_hash_hex: &str) -> String {
        format!("{}/tx/0x{}", self.explorer_url, tx_hash_hex)
    }

    /// Marketplace page for the minting contract.
    pub fn marketplace_link(&self, contract: &str) -> String {
        format!("{}/{}", self.marketplace_url, contract)
    }

    fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case(&self.name) || selector.eq_ignore_ascii_case(self.key) {
            return true;
        }
        let alias = match self.key {
            "mainnet" => "base",
            _ => "base-sepolia",
        };
        selector.eq_ignore_ascii_case(alias)
    }
}

/// The set of selectable networks.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    profiles: [NetworkProfile; 2],
}

impl NetworkRegistry {
    /// Presets with RPC overrides from configuration applied.
    pub fn from_config(config: &ChainConfig) -> Self {
        let mut mainnet = NetworkProfile::base_mainnet();
        let mut testnet = NetworkProfile::base_sepolia();

        if let Some(url) = &config.mainnet_rpc_url {
            mainnet.rpc_url = url.clone();
        }
        if let Some(url) = &config.testnet_rpc_url {
            testnet.rpc_url = url.clone();
        }

        Self {
            profiles: [mainnet, testnet],
        }
    }

    /// Look up a network by display name or short key, case-insensitively.
    pub fn resolve(&self, selector: &str) -> Option<&NetworkProfile> {
        self.profiles.iter().find(|p| p.matches(selector))
    }

    pub fn profiles(&self) -> &[NetworkProfile] {
        &self.profiles
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::from_config(&ChainConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let registry = NetworkRegistry::default();
        assert_eq!(registry.profiles().len(), 2);

        let mainnet = registry.resolve("Base Mainnet").unwrap();
        assert_eq!(mainnet.chain_id, 8453);
        assert_eq!(mainnet.rpc_url, "https://mainnet.base.org");

        let testnet = registry.resolve("Base Sepolia (Testnet)").unwrap();
        assert_eq!(testnet.chain_id, 84532);
        assert_eq!(testnet.explorer_url, "https://sepolia.basescan.org");
    }

    #[test]
    fn test_short_selectors() {
        let registry = NetworkRegistry::default();
        assert_eq!(registry.resolve("TESTNET").unwrap().chain_id, 84532);
        assert_eq!(registry.resolve(" base ").unwrap().chain_id, 8453);
        assert_eq!(registry.resolve("base-sepolia").unwrap().chain_id, 84532);
        assert!(registry.resolve("optimism").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_rpc_override_keeps_chain_id() {
        let config = ChainConfig {
            testnet_rpc_url: Some("http://127.0.0.1:8545".into()),
            ..ChainConfig::default()
        };
        let registry = NetworkRegistry::from_config(&config);

        let testnet = registry.resolve("testnet").unwrap();
        assert_eq!(testnet.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(testnet.chain_id, 84532);
        assert_eq!(registry.resolve("mainnet").unwrap().rpc_url, "https://mainnet.base.org");
    }

    #[test]
    fn test_links() {
        let mainnet = NetworkProfile::base_mainnet();
        assert_eq!(mainnet.tx_link("abcd"), "https://basescan.org/tx/0xabcd");
        assert_eq!(
            NetworkProfile::base_sepolia().marketplace_link("0x01"),
            "https://testnets.opensea.io/assets/base-sepolia/0x01"
        );
    }
}
