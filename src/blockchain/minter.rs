//! Mint transaction building, signing, and broadcast.
//!
//! # Steps
//! 1. Liveness check (block number)
//! 2. Signer from the session key
//! 3. Contract and recipient addresses
//! 4. Nonce
//! 5. Gas estimate with margin, or the default limit
//! 6. EIP-1559 fees from the current gas price
//! 7. Sign locally and broadcast
//!
//! Any failure aborts the mint. A transaction that was broadcast but whose
//! hash could not be reported may still land on-chain.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::Bytes;
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::MintChain;
use crate::blockchain::contract::public_mint_calldata;
use crate::blockchain::gas::{self, FeeQuote};
use crate::blockchain::types::{ChainError, ChainResult, MintOutcome};
use crate::blockchain::wallet::{parse_address, resolve_recipient, Wallet};
use crate::network::NetworkProfile;
use crate::observability::metrics;
use crate::session::SessionConfig;

/// Submits `publicMint` calls on one network.
pub struct Minter<'a> {
    chain: &'a dyn MintChain,
    network: &'a NetworkProfile,
}

impl<'a> Minter<'a> {
    pub fn new(chain: &'a dyn MintChain, network: &'a NetworkProfile) -> Self {
        Self { chain, network }
    }

    /// Mint a token with `token_uri` to `recipient` (the signer when blank).
    pub async fn mint(
        &self,
        session: &SessionConfig,
        recipient: Option<&str>,
        token_uri: &str,
    ) -> ChainResult<MintOutcome> {
        let head = self
            .chain
            .block_number()
            .await
            .map_err(|e| ChainError::Unreachable {
                network: self.network.name.clone(),
                reason: e.to_string(),
            })?;
        tracing::debug!(network = %self.network.name, head, "RPC endpoint reachable");

        let wallet = Wallet::from_private_key(&session.private_key, self.network.chain_id)?;
        let contract = parse_address("contract", &session.contract_address)?;
        let recipient = resolve_recipient(&wallet, recipient)?;

        let nonce = self.chain.transaction_count(wallet.address()).await?;

        let call = TransactionRequest::default()
            .with_from(wallet.address())
            .with_to(contract)
            .with_input(public_mint_calldata(recipient, token_uri));

        let (gas_limit, gas_fallback) = match self.chain.estimate_gas(call.clone()).await {
            Ok(estimate) => {
                let limit = gas::gas_limit_for(Some(estimate));
                tracing::debug!(estimate, gas_limit = limit, "Gas estimated");
                (limit, false)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    gas_limit = gas::DEFAULT_GAS_LIMIT,
                    "Unable to estimate gas, using default value"
                );
                metrics::record_gas_fallback();
                (gas::gas_limit_for(None), true)
            }
        };

        let base_fee = self.chain.gas_price().await?;
        let fees = FeeQuote::from_base_fee(base_fee);

        let tx = call
            .with_nonce(nonce)
            .with_chain_id(wallet.chain_id())
            .with_gas_limit(gas_limit)
            .with_max_fee_per_gas(fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas);

        let envelope = tx
            .build(&wallet.ethereum_wallet())
            .await
            .map_err(|e| ChainError::Signing(e.to_string()))?;
        let raw = Bytes::from(envelope.encoded_2718());

        let tx_hash = self.chain.send_raw_transaction(raw).await?;

        tracing::info!(
            tx_hash = %tx_hash,
            network = %self.network.name,
            from = %wallet.address(),
            to = %recipient,
            nonce,
            gas_limit,
            max_fee_per_gas = fees.max_fee_per_gas,
            "Mint transaction broadcast"
        );

        Ok(MintOutcome {
            tx_hash,
            explorer_url: self.network.explorer_url.clone(),
            nonce,
            gas_limit,
            gas_fallback,
            max_fee_per_gas: fees.max_fee_per_gas,
            max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::consensus::TxEnvelope;
    use alloy::eips::eip2718::Decodable2718;
    use alloy::primitives::{keccak256, Address, TxHash};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    struct ScriptedChain {
        reachable: bool,
        estimate: Option<u64>,
        gas_price: u128,
        nonce: u64,
        calls: Mutex<Vec<&'static str>>,
        sent: Mutex<Vec<Bytes>>,
    }

    impl ScriptedChain {
        fn new(estimate: Option<u64>) -> Self {
            Self {
                reachable: true,
                estimate,
                gas_price: 1_000_000_000,
                nonce: 7,
                calls: Mutex::new(Vec::new()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn log(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MintChain for ScriptedChain {
        async fn block_number(&self) -> ChainResult<u64> {
            self.log("block_number");
            if self.reachable {
                Ok(100)
            } else {
                Err(ChainError::Rpc("connection refused".into()))
            }
        }

        async fn transaction_count(&self, _address: Address) -> ChainResult<u64> {
            self.log("transaction_count");
            Ok(self.nonce)
        }

        async fn estimate_gas(&self, _tx: TransactionRequest) -> ChainResult<u64> {
            self.log("estimate_gas");
            self.estimate
                .ok_or_else(|| ChainError::Rpc("execution reverted".into()))
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

    fn session() -> SessionConfig {
        SessionConfig {
            contract_address: CONTRACT.into(),
            private_key: TEST_PRIVATE_KEY.into(),
            pinata_api_key: "key".into(),
            pinata_secret_key: "secret".into(),
            network: "testnet".into(),
        }
    }

    #[tokio::test]
    async fn test_mint_signs_eip1559_transaction() {
        let chain = ScriptedChain::new(Some(100_000));
        let network = NetworkProfile::base_sepolia();
        let minter = Minter::new(&chain, &network);

        let outcome = minter.mint(&session(), None, "ipfs://Qm222").await.unwrap();

        assert_eq!(outcome.gas_limit, 120_000);
        assert!(!outcome.gas_fallback);
        assert_eq!(outcome.nonce, 7);
        assert_eq!(outcome.max_fee_per_gas, 1_100_000_000);
        assert_eq!(outcome.max_priority_fee_per_gas, 100_000_000);
        assert_eq!(outcome.explorer_url, "https://sepolia.basescan.org");
        assert_eq!(
            chain.calls(),
            vec!["block_number", "transaction_count", "estimate_gas", "gas_price", "send_raw_transaction"]
        );

        let raw = chain.sent.lock().unwrap()[0].clone();
        let envelope = TxEnvelope::decode_2718(&mut raw.as_ref()).unwrap();
        let signed = envelope.as_eip1559().expect("EIP-1559 transaction");
        assert_eq!(signed.tx().chain_id, 84532);
        assert_eq!(signed.tx().nonce, 7);
        assert_eq!(signed.tx().gas_limit, 120_000);
        assert_eq!(signed.tx().max_fee_per_gas, 1_100_000_000);
        assert_eq!(*envelope.tx_hash(), outcome.tx_hash);
    }

    #[tokio::test]
    async fn test_failed_estimate_uses_default_limit() {
        let chain = ScriptedChain::new(None);
        let network = NetworkProfile::base_sepolia();

        let outcome = Minter::new(&chain, &network)
            .mint(&session(), None, "ipfs://Qm222")
            .await
            .unwrap();

        assert_eq!(outcome.gas_limit, 300_000);
        assert!(outcome.gas_fallback);
        assert_eq!(chain.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_rpc_fails_fast() {
        let mut chain = ScriptedChain::new(Some(100_000));
        chain.reachable = false;
        let network = NetworkProfile::base_mainnet();

        let err = Minter::new(&chain, &network)
            .mint(&session(), None, "ipfs://Qm222")
            .await
            .unwrap_err();

        assert!(matches!(err, ChainError::Unreachable { .. }));
        assert_eq!(chain.calls(), vec!["block_number"]);
    }

    #[tokio::test]
    async fn test_malformed_key_aborts_before_nonce() {
        let chain = ScriptedChain::new(Some(100_000));
        let network = NetworkProfile::base_sepolia();
        let session = SessionConfig {
            private_key: "0xnothex".into(),
            ..session()
        };

        let err = Minter::new(&chain, &network)
            .mint(&session, None, "ipfs://Qm222")
            .await
            .unwrap_err();

        assert!(matches!(err, ChainError::Wallet(_)));
        assert_eq!(chain.calls(), vec!["block_number"]);
    }

    #[tokio::test]
    async fn test_invalid_contract_address() {
        let chain = ScriptedChain::new(Some(100_000));
        let network = NetworkProfile::base_sepolia();
        let session = SessionConfig {
            contract_address: "0xabc".into(),
            ..session()
        };

        let err = Minter::new(&chain, &network)
            .mint(&session, None, "ipfs://Qm222")
            .await
            .unwrap_err();

        assert!(matches!(err, ChainError::InvalidAddress { field: "contract", .. }));
        assert!(chain.sent.lock().unwrap().is_empty());
    }
}
