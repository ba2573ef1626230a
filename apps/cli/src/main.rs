//! suifolio: read-only terminal summary of a Sui wallet.

mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use suifolio_core::{HttpRpcTransport, PortfolioService, SuiNetwork};
use tracing_subscriber::EnvFilter;

/// Read holdings, recent activity and protocol positions for a Sui wallet.
#[derive(Parser, Debug)]
#[command(name = "suifolio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Sui wallet address (0x...) to inspect
    address: String,

    /// Sui network to query (mainnet, testnet, devnet)
    #[arg(long, default_value = "mainnet")]
    network: String,

    /// Custom fullnode RPC URL; overrides --network and SUI_RPC_URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Endpoint precedence: explicit flag, then environment, then the
    /// selected network's public fullnode.
    fn endpoint(&self) -> anyhow::Result<(String, String)> {
        if let Some(url) = &self.rpc_url {
            return Ok((url.clone(), "custom".to_string()));
        }
        if let Ok(url) = std::env::var("SUI_RPC_URL") {
            if !url.is_empty() {
                return Ok((url, "custom".to_string()));
            }
        }
        let network: SuiNetwork = self.network.parse().context("invalid --network")?;
        Ok((network.endpoint().to_string(), network.to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let (endpoint, network_label) = cli.endpoint()?;
    tracing::debug!(endpoint, "querying fullnode");

    let transport = Arc::new(HttpRpcTransport::new(endpoint));
    let service = PortfolioService::new(transport);

    let view = service
        .lookup(&cli.address)
        .await
        .context("wallet lookup failed")?;

    render::print_wallet_view(&view, &network_label);
    Ok(())
}
