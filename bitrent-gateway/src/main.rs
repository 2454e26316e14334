//! BitRent Gateway - REST front for a Stacks ledger node
//!
//! This binary:
//! - Serves property, ownership and revenue queries as read-only contract calls
//! - Relays signed transactions to the node
//!
//! Settings come from defaults, an optional TOML file, the environment (and `.env`),
//! then the flags below.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bitrent_gateway::{router, AppState, GatewayConfig};
use clap::Parser;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// BitRent Gateway CLI
#[derive(Parser)]
#[command(name = "bitrent-gateway")]
#[command(about = "BitRent REST gateway for Stacks contract calls", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Listen host (overrides settings)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides settings)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_cli_overrides(cli.host, cli.port);

    let state = AppState::from_config(&config).context("Invalid configuration")?;
    info!("Upstream node: {}", state.client.base_url());
    info!("NFT contract: {}", state.contracts.nft);
    info!("Revenue contract: {}", state.contracts.revenue);

    let addr = config.listen_addr().context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;
    info!("Backend listening on http://{}", addr);

    let shutdown = CancellationToken::new();
    tokio::spawn(wait_for_signal(shutdown.clone()));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn wait_for_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining requests");
    shutdown.cancel();
}
