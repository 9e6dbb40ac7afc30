//! NFT minting service library.
//!
//! Pins an image and its metadata to IPFS and mints a token pointing at the
//! metadata on a Base network.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod metadata;
pub mod network;
pub mod observability;
pub mod pinning;
pub mod pipeline;
pub mod session;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use pipeline::{MintError, MintPipeline, MintReceipt, MintRequest};
pub use session::SessionConfig;
