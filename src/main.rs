use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::time::Duration;
use tracing_subscriber::{self, filter::EnvFilter};

use refactor_bridge_mcp::{bridge_service::BridgeService, config::BridgeConfig};

/// PyCharm Refactoring MCP Server - semantic refactorings through the Refactoring Bridge plugin
#[derive(Parser, Debug)]
#[command(name = "refactor-bridge-mcp")]
#[command(about = "Model Context Protocol server for PyCharm refactorings")]
#[command(version)]
struct Args {
    /// Base URL of the Refactoring Bridge (overrides PYCHARM_BRIDGE_URL)
    #[arg(long = "bridge-url", value_name = "URL")]
    bridge_url: Option<String>,

    /// Bearer token for the bridge (overrides PYCHARM_BRIDGE_TOKEN)
    #[arg(long = "auth-token", value_name = "TOKEN")]
    auth_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long = "timeout-secs",
        help = "Per-request timeout in seconds (default: 30)",
        value_name = "SECONDS"
    )]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = BridgeConfig::resolve(
        args.bridge_url,
        args.auth_token,
        args.timeout_secs.map(Duration::from_secs),
    );
    tracing::info!(
        "Starting MCP server for bridge at {} (timeout {:?}, auth {})",
        config.base_url,
        config.timeout,
        if config.auth_token.is_some() { "enabled" } else { "disabled" }
    );

    let service = BridgeService::with_config(config).serve(stdio()).await?;

    tracing::info!("Service started, waiting for connections");
    service.waiting().await?;
    Ok(())
}
