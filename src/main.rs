//! NFT minting service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser form / API client
//!          │  multipart POST /api/mint
//!          ▼
//!   ┌──────────────┐     ┌───────────────────────────────────────────┐
//!   │ http server  │────▶│               MintPipeline                │
//!   │ (axum)       │     │                                           │
//!   └──────────────┘     │  validate ─▶ pin image ─▶ pin metadata ─▶ │
//!                        │                              mint         │
//!                        └──────┬──────────────────────────┬─────────┘
//!                               │                          │
//!                               ▼                          ▼
//!                        ┌─────────────┐           ┌──────────────┐
//!                        │ Pinata API  │           │ Base JSON-RPC│
//!                        └─────────────┘           └──────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use nft_minter::blockchain::RpcConnector;
use nft_minter::config::{load_config, ServiceConfig};
use nft_minter::network::NetworkRegistry;
use nft_minter::observability::{logging, metrics};
use nft_minter::pinning::PinataClient;
use nft_minter::{HttpServer, MintPipeline};

#[derive(Parser)]
#[command(name = "nft-minter")]
#[command(about = "Pin images to IPFS and mint them as NFTs on Base", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "NFT_MINTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("nft-minter v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.server.bind_address,
        pinning_api = %config.pinning.api_url,
        rpc_timeout_secs = config.chain.rpc_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let pinata = PinataClient::new(&config.pinning)?;
    let networks = NetworkRegistry::from_config(&config.chain);
    let connector = Arc::new(RpcConnector::new(Duration::from_secs(config.chain.rpc_timeout_secs)));
    let pipeline = Arc::new(MintPipeline::new(pinata, networks, connector));

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    HttpServer::new(&config.server, pipeline).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
