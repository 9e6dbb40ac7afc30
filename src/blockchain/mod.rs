//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! SessionConfig (private key, contract address)
//!     → wallet.rs (key parsing, local signing)
//!     → client.rs (RPC connection with timeouts)
//!     → minter.rs (estimate, fee, sign, broadcast)
//! ```
//!
//! # Security Constraints
//! - Private keys arrive per request and are never stored process-wide
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod contract;
pub mod gas;
pub mod minter;
pub mod types;
pub mod wallet;

pub use client::{ChainConnector, MintChain, RpcChain, RpcConnector};
pub use minter::Minter;
pub use types::{ChainError, ChainResult, MintOutcome};
pub use wallet::Wallet;
