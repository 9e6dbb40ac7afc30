//! Pinning service wire types and errors.

use serde::Deserialize;
use thiserror::Error;

/// Successful pin response. Pinata returns more fields; only the hash is used.
#[derive(Debug, Clone, Deserialize)]
pub struct PinResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
}

/// Which endpoint a pin went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    File,
    Json,
}

impl PinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PinKind::File => "file",
            PinKind::Json => "json",
        }
    }

    /// What the pinned content is, for user-facing messages.
    pub fn describe(self) -> &'static str {
        match self {
            PinKind::File => "image",
            PinKind::Json => "metadata",
        }
    }
}

/// Errors that can occur while pinning.
#[derive(Debug, Error)]
pub enum PinError {
    /// Connection failed or timed out before a response arrived.
    #[error("connection error to pinning service: {0}")]
    Unreachable(String),

    /// The service answered with a non-200 status.
    #[error("{kind} upload error ({status}): {body}")]
    Rejected {
        kind: &'static str,
        status: u16,
        body: String,
    },

    /// 200 response without a usable hash.
    #[error("malformed pinning response: {0}")]
    MalformedResponse(String),
}

/// Result type for pinning operations.
pub type PinResult<T> = Result<T, PinError>;
