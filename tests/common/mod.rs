//! Shared fakes for integration testing.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::consensus::TxEnvelope;
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{keccak256, Address, Bytes, TxHash};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use nft_minter::blockchain::contract::INftCollection;
use nft_minter::blockchain::{ChainConnector, ChainError, ChainResult, MintChain};
use nft_minter::config::PinningConfig;
use nft_minter::network::{NetworkProfile, NetworkRegistry};
use nft_minter::pinning::PinataClient;
use nft_minter::pipeline::{Asset, MintPipeline, MintRequest};
use nft_minter::SessionConfig;

/// Anvil's first account. Publicly known; never use for real funds.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_SIGNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TEST_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const OTHER_RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// In-memory chain that accepts every transaction.
pub struct FakeChain {
    pub estimate: Option<u64>,
    pub gas_price: u128,
    pub nonce: u64,
    /// How long `estimate_gas` takes to answer.
    pub estimate_delay: Duration,
    calls: Mutex<Vec<&'static str>>,
    sent: Mutex<Vec<Bytes>>,
}

impl FakeChain {
    pub fn new(estimate: Option<u64>) -> Self {
        Self {
            estimate,
            gas_price: 2_000_000_000,
            nonce: 3,
            estimate_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_estimate_delay(mut self, delay: Duration) -> Self {
        self.estimate_delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// The single transaction broadcast so far, decoded.
    pub fn sent_transaction(&self) -> TxEnvelope {
        let sent = self.sent.lock().unwrap();
        assert_eq!(sent.len(), 1, "expected exactly one broadcast");
        TxEnvelope::decode_2718(&mut sent[0].as_ref()).unwrap()
    }

    /// The `publicMint` arguments of the broadcast transaction.
    pub fn sent_mint_call(&self) -> INftCollection::publicMintCall {
        let envelope = self.sent_transaction();
        let signed = envelope.as_eip1559().expect("EIP-1559 transaction");
        INftCollection::publicMintCall::abi_decode(&signed.tx().input).unwrap()
    }

    fn log(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MintChain for FakeChain {
    async fn block_number(&self) -> ChainResult<u64> {
        self.log("block_number");
        Ok(1_000)
    }

    async fn transaction_count(&self, _address: Address) -> ChainResult<u64> {
        self.log("transaction_count");
        Ok(self.nonce)
    }

    async fn estimate_gas(&self, _tx: TransactionRequest) -> ChainResult<u64> {
        self.log("estimate_gas");
        if !self.estimate_delay.is_zero() {
            tokio::time::sleep(self.estimate_delay).await;
        }
        self.estimate
            .ok_or_else(|| ChainError::Rpc("execution reverted".to_string()))
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        self.log("gas_price");
        Ok(self.gas_price)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> ChainResult<TxHash> {
        self.log("send_raw_transaction");
        let hash = keccak256(&raw);
        self.sent.lock().unwrap().push(raw);
        Ok(hash)
    }
}

/// Hands out the same [`FakeChain`] for every network and counts connections.
pub struct FakeConnector {
    pub chain: Arc<FakeChain>,
    connects: AtomicUsize,
}

impl FakeConnector {
    pub fn new(chain: Arc<FakeChain>) -> Self {
        Self {
            chain,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl ChainConnector for FakeConnector {
    fn connect(&self, _network: &NetworkProfile) -> ChainResult<Arc<dyn MintChain>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain.clone())
    }
}

/// Pipeline pinning against `pinning_url` and minting on `connector`.
pub fn pipeline(pinning_url: &str, connector: Arc<FakeConnector>) -> MintPipeline {
    let pinata = PinataClient::new(&PinningConfig {
        api_url: pinning_url.to_string(),
        ..PinningConfig::default()
    })
    .unwrap();
    MintPipeline::new(pinata, NetworkRegistry::default(), connector)
}

pub fn session() -> SessionConfig {
    SessionConfig {
        contract_address: TEST_CONTRACT.to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        pinata_api_key: "test-key".to_string(),
        pinata_secret_key: "test-secret".to_string(),
        network: "Base Sepolia (Testnet)".to_string(),
    }
}

pub fn request() -> MintRequest {
    MintRequest {
        image: Some(Asset {
            bytes: b"\x89PNG fake image".to_vec(),
            filename: "test.png".to_string(),
        }),
        name: "Test".to_string(),
        description: "Desc".to_string(),
        recipient: None,
        attributes: Vec::new(),
    }
}

/// Mock both pinning endpoints, returning `Qm111` for the image and
/// `Qm222` for the metadata.
pub async fn mock_pinning(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
    let file = server
        .mock("POST", "/pinning/pinFileToIPFS")
        .match_header("pinata_api_key", "test-key")
        .match_header("pinata_secret_api_key", "test-secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"IpfsHash":"Qm111","PinSize":15,"Timestamp":"2024-01-01T00:00:00Z"}"#)
        .expect(1)
        .create_async()
        .await;
    let json = server
        .mock("POST", "/pinning/pinJSONToIPFS")
        .match_header("pinata_api_key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"IpfsHash":"Qm222","PinSize":120,"Timestamp":"2024-01-01T00:00:00Z"}"#)
        .expect(1)
        .create_async()
        .await;
    (file, json)
}
