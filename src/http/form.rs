//! Multipart form decoding for `POST /api/mint`.
//!
//! Trait rows arrive as repeated `trait_type` / `trait_value` fields and are
//! paired by position. Unknown fields are skipped.

use axum::extract::multipart::{Multipart, MultipartError};

use crate::metadata::collect_attributes;
use crate::pipeline::{Asset, MintRequest};
use crate::session::SessionConfig;

/// Split the submitted form into the session and the mint request.
pub async fn parse_mint_form(
    mut multipart: Multipart,
) -> Result<(SessionConfig, MintRequest), MultipartError> {
    let mut session = SessionConfig::default();
    let mut request = MintRequest::default();
    let mut trait_types = Vec::new();
    let mut trait_values = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => {
                let filename = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .unwrap_or("image")
                    .to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    request.image = Some(Asset {
                        bytes: bytes.to_vec(),
                        filename,
                    });
                }
            }
            "name" => request.name = field.text().await?,
            "description" => request.description = field.text().await?,
            "recipient" => {
                let recipient = field.text().await?;
                request.recipient = Some(recipient).filter(|r| !r.trim().is_empty());
            }
            "network" => session.network = field.text().await?,
            "contract_address" => session.contract_address = field.text().await?,
            "private_key" => session.private_key = field.text().await?,
            "pinata_api_key" => session.pinata_api_key = field.text().await?,
            "pinata_secret_key" => session.pinata_secret_key = field.text().await?,
            "trait_type" => trait_types.push(field.text().await?),
            "trait_value" => trait_values.push(field.text().await?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    request.attributes = collect_attributes(trait_types, trait_values);
    Ok((session, request))
}
