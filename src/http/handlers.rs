use axum::{
    extract::{multipart::MultipartError, Json, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::blockchain::Wallet;
use crate::http::form::parse_mint_form;
use crate::http::page::INDEX_HTML;
use crate::http::server::AppState;
use crate::network::NetworkProfile;
use crate::pipeline::{MintError, MintReceipt};

/// Error body: `{"error": "...", "kind": "config" | "upload" | "chain" | "request" | "internal"}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.message, "kind": self.kind })),
        )
            .into_response()
    }
}

impl From<MintError> for ApiError {
    fn from(e: MintError) -> Self {
        let status = match e {
            MintError::Config(_) => StatusCode::BAD_REQUEST,
            MintError::Upload(_) | MintError::Chain(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self {
            status: e.status(),
            kind: "request",
            message: e.body_text(),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_networks(State(state): State<AppState>) -> Json<Vec<NetworkProfile>> {
    Json(state.pipeline.networks().profiles().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct WalletRequest {
    pub private_key: String,
}

#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub address: String,
    pub short: String,
}

/// Show which address a key signs as.
pub async fn wallet_preview(Json(request): Json<WalletRequest>) -> Result<Json<WalletResponse>, ApiError> {
    // The chain id does not affect the derived address.
    let wallet = Wallet::from_private_key(&request.private_key, 0).map_err(|_| ApiError {
        status: StatusCode::BAD_REQUEST,
        kind: "config",
        message: "Invalid private key".to_string(),
    })?;

    Ok(Json(WalletResponse {
        address: wallet.address().to_checksum(None),
        short: wallet.short_address(),
    }))
}

/// Run a mint from the submitted form.
///
/// The pipeline runs on its own task, so a client that disconnects after the
/// form is read does not abandon a mint whose uploads are already paid for.
pub async fn mint(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MintReceipt>, ApiError> {
    let (session, request) = parse_mint_form(multipart).await?;

    let pipeline = state.pipeline.clone();
    let receipt = tokio::spawn(async move { pipeline.run(&session, request).await })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Mint task failed");
            ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "internal",
                message: "Mint task failed".to_string(),
            }
        })??;

    Ok(Json(receipt))
}
