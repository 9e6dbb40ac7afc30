//! Per-request configuration.
//!
//! A [`SessionConfig`] is built for every mint attempt from the caller's
//! input and dropped when the attempt finishes. Signing keys and pinning
//! credentials live only here.

use serde::Deserialize;
use thiserror::Error;

/// Configuration problems detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("please upload an image")]
    MissingImage,

    #[error("unsupported image type '{0}' (expected png, jpg, jpeg, gif or webp)")]
    UnsupportedImage(String),

    #[error("too many attributes: {count} (max {max})")]
    TooManyAttributes { count: usize, max: usize },
}

/// Pinning service credentials, sent as header pairs.
#[derive(Clone)]
pub struct PinningCredentials {
    pub api_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for PinningCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinningCredentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Everything a single mint needs from the user besides the asset itself.
#[derive(Clone, Default, Deserialize)]
pub struct SessionConfig {
    pub contract_address: String,
    pub private_key: String,
    pub pinata_api_key: String,
    pub pinata_secret_key: String,
    pub network: String,
}

impl SessionConfig {
    /// Check that every field is filled in.
    pub fn validate(&self) -> Result<(), SessionError> {
        let fields = [
            ("contract_address", &self.contract_address),
            ("private_key", &self.private_key),
            ("pinata_api_key", &self.pinata_api_key),
            ("pinata_secret_key", &self.pinata_secret_key),
            ("network", &self.network),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SessionError::MissingFields(missing))
        }
    }

    pub fn pinning_credentials(&self) -> PinningCredentials {
        PinningCredentials {
            api_key: self.pinata_api_key.trim().to_string(),
            secret_key: self.pinata_secret_key.trim().to_string(),
        }
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("contract_address", &self.contract_address)
            .field("private_key", &"<redacted>")
            .field("pinata_api_key", &"<redacted>")
            .field("pinata_secret_key", &"<redacted>")
            .field("network", &self.network)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SessionConfig {
        SessionConfig {
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            private_key: "deadbeef".into(),
            pinata_api_key: "key".into(),
            pinata_secret_key: "secret".into(),
            network: "testnet".into(),
        }
    }

    #[test]
    fn test_complete_session_validates() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let session = SessionConfig {
            private_key: "  ".into(),
            pinata_secret_key: String::new(),
            ..filled()
        };
        assert_eq!(
            session.validate(),
            Err(SessionError::MissingFields(vec!["private_key", "pinata_secret_key"]))
        );
        assert_eq!(
            session.validate().unwrap_err().to_string(),
            "missing required fields: private_key, pinata_secret_key"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", filled());
        assert!(!rendered.contains("deadbeef"));
        assert!(!rendered.contains("secret\""));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("testnet"));
    }
}
