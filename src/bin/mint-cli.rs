use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use nft_minter::blockchain::{RpcConnector, Wallet};
use nft_minter::config::{ChainConfig, PinningConfig};
use nft_minter::metadata::Attribute;
use nft_minter::network::NetworkRegistry;
use nft_minter::observability::logging;
use nft_minter::pinning::PinataClient;
use nft_minter::pipeline::{Asset, MintPipeline, MintReceipt, MintRequest};
use nft_minter::SessionConfig;

#[derive(Parser)]
#[command(name = "mint-cli")]
#[command(about = "Pin an image to IPFS and mint it as an NFT on Base", long_about = None)]
struct Cli {
    /// Pinning API base URL.
    #[arg(long, default_value = "https://api.pinata.cloud")]
    pinata_url: String,

    /// RPC timeout in seconds.
    #[arg(long, default_value_t = 30)]
    rpc_timeout: u64,

    /// Replace the selected network's RPC endpoint.
    #[arg(long, env = "RPC_URL")]
    rpc_url: Option<String>,

    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and metadata, then mint
    Mint(MintArgs),
    /// Show the address a private key signs as
    Address {
        #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// List supported networks
    Networks,
}

#[derive(Args)]
struct MintArgs {
    /// Image file (PNG, JPG, JPEG, GIF, WEBP).
    #[arg(long)]
    image: PathBuf,

    #[arg(long)]
    name: String,

    #[arg(long)]
    description: String,

    /// Defaults to the signer's address.
    #[arg(long)]
    recipient: Option<String>,

    /// Trait as TYPE=VALUE; repeat for several, order is kept.
    #[arg(long = "attribute", value_name = "TYPE=VALUE")]
    attributes: Vec<Attribute>,

    #[arg(long, env = "NETWORK", default_value = "Base Sepolia (Testnet)")]
    network: String,

    #[arg(long, env = "CONTRACT_ADDRESS", default_value = "")]
    contract_address: String,

    #[arg(long, env = "PRIVATE_KEY", default_value = "", hide_env_values = true)]
    private_key: String,

    #[arg(long, env = "PINATA_API_KEY", default_value = "", hide_env_values = true)]
    pinata_api_key: String,

    #[arg(long, env = "PINATA_SECRET_KEY", default_value = "", hide_env_values = true)]
    pinata_secret_key: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match cli.command {
        Commands::Networks => {
            for network in NetworkRegistry::default().profiles() {
                println!(
                    "{} ({}): chain {} rpc {} explorer {}",
                    network.name, network.key, network.chain_id, network.rpc_url, network.explorer_url
                );
            }
        }
        Commands::Address { private_key } => match Wallet::from_private_key(&private_key, 0) {
            Ok(wallet) => println!("Wallet: {} ({})", wallet.address(), wallet.short_address()),
            Err(_) => {
                eprintln!("Error: Invalid private key");
                std::process::exit(1);
            }
        },
        Commands::Mint(args) => {
            let pipeline = build_pipeline(&cli.pinata_url, cli.rpc_timeout, cli.rpc_url, &args.network)?;

            let bytes = tokio::fs::read(&args.image).await?;
            let filename = args
                .image
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());

            let session = SessionConfig {
                contract_address: args.contract_address,
                private_key: args.private_key,
                pinata_api_key: args.pinata_api_key,
                pinata_secret_key: args.pinata_secret_key,
                network: args.network,
            };
            let request = MintRequest {
                image: Some(Asset { bytes, filename }),
                name: args.name,
                description: args.description,
                recipient: args.recipient,
                attributes: args.attributes,
            };

            match pipeline.run(&session, request).await {
                Ok(receipt) => print_receipt(&receipt),
                Err(e) => {
                    eprintln!("Error ({}): {}", e.kind(), e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn build_pipeline(
    pinata_url: &str,
    rpc_timeout: u64,
    rpc_url: Option<String>,
    network: &str,
) -> Result<MintPipeline, Box<dyn std::error::Error>> {
    let pinning = PinningConfig {
        api_url: pinata_url.to_string(),
        ..PinningConfig::default()
    };

    let mut chain = ChainConfig {
        rpc_timeout_secs: rpc_timeout,
        ..ChainConfig::default()
    };
    if let Some(url) = rpc_url {
        match NetworkRegistry::default().resolve(network).map(|n| n.key) {
            Some("mainnet") => chain.mainnet_rpc_url = Some(url),
            Some(_) => chain.testnet_rpc_url = Some(url),
            None => {}
        }
    }

    Ok(MintPipeline::new(
        PinataClient::new(&pinning)?,
        NetworkRegistry::from_config(&chain),
        Arc::new(RpcConnector::new(Duration::from_secs(rpc_timeout))),
    ))
}

fn print_receipt(receipt: &MintReceipt) {
    println!("NFT created successfully!");
    println!();
    println!("Transaction Hash: {}", receipt.tx_hash);
    println!("Token URI:        {}", receipt.token_uri);
    println!("Recipient:        {}", receipt.recipient);
    println!("Network:          {}", receipt.network);
    if receipt.gas_fallback {
        println!("Gas limit:        {} (estimate unavailable, default used)", receipt.gas_limit);
    }
    println!();
    println!("Explorer:    {}", receipt.explorer_link);
    println!("Marketplace: {}", receipt.marketplace_link);
    println!("IPFS Image:  {}", receipt.image_link);
}
