//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint of the selected network
//! - Query chain state needed for a mint (head, nonce, gas price, estimate)
//! - Broadcast signed raw transactions
//! - Bound every call by the configured RPC timeout

use std::fmt::Display;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::types::{ChainError, ChainResult};
use crate::network::NetworkProfile;

/// The JSON-RPC calls a mint needs.
#[async_trait]
pub trait MintChain: Send + Sync {
    /// Latest block number; doubles as the liveness probe.
    async fn block_number(&self) -> ChainResult<u64>;

    /// Pending-inclusive transaction count of `address`.
    async fn transaction_count(&self, address: Address) -> ChainResult<u64>;

    /// Gas the call would consume if executed now.
    async fn estimate_gas(&self, tx: TransactionRequest) -> ChainResult<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> ChainResult<u128>;

    /// Submit a signed, EIP-2718 encoded transaction.
    async fn send_raw_transaction(&self, raw: Bytes) -> ChainResult<TxHash>;
}

/// Produces a chain handle for a network.
pub trait ChainConnector: Send + Sync {
    fn connect(&self, network: &NetworkProfile) -> ChainResult<Arc<dyn MintChain>>;
}

/// [`MintChain`] over an alloy HTTP provider.
#[derive(Clone)]
pub struct RpcChain {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcChain {
    /// Build a provider for the network's RPC URL. Does not touch the network.
    pub fn connect(network: &NetworkProfile, timeout_duration: Duration) -> ChainResult<Self> {
        let url: url::Url = network.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", network.rpc_url, e))
        })?;
        let provider = Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            provider,
            rpc_url: network.rpc_url.clone(),
            timeout_duration,
        })
    }

    async fn call<T, E, F>(&self, method: &'static str, fut: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(method, rpc_url = %self.rpc_url, error = %e, "RPC error");
                Err(ChainError::Rpc(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(method, rpc_url = %self.rpc_url, "RPC timeout");
                Err(ChainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

#[async_trait]
impl MintChain for RpcChain {
    async fn block_number(&self) -> ChainResult<u64> {
        self.call("eth_blockNumber", self.provider.get_block_number()).await
    }

    async fn transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.call("eth_getTransactionCount", self.provider.get_transaction_count(address))
            .await
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> ChainResult<u64> {
        self.call("eth_estimateGas", self.provider.estimate_gas(tx)).await
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        self.call("eth_gasPrice", self.provider.get_gas_price()).await
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> ChainResult<TxHash> {
        let pending = self
            .call("eth_sendRawTransaction", self.provider.send_raw_transaction(&raw))
            .await
            .map_err(|e| match e {
                ChainError::Rpc(msg) => ChainError::Rejected(msg),
                other => other,
            })?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for RpcChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChain")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

/// Connects to each network's configured RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcConnector {
    timeout_duration: Duration,
}

impl RpcConnector {
    pub fn new(timeout_duration: Duration) -> Self {
        Self { timeout_duration }
    }
}

impl ChainConnector for RpcConnector {
    fn connect(&self, network: &NetworkProfile) -> ChainResult<Arc<dyn MintChain>> {
        Ok(Arc::new(RpcChain::connect(network, self.timeout_duration)?))
    }
}
