//! IPFS pinning through Pinata.
//!
//! # Data Flow
//! ```text
//! image bytes + filename
//!     → client.rs pin_file   → image hash
//! metadata (built from image hash)
//!     → client.rs pin_json   → metadata hash → token URI
//! ```

pub mod client;
pub mod types;

pub use client::PinataClient;
pub use types::{PinError, PinKind, PinResponse, PinResult};
