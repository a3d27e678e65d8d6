//! samwise-leads CLI binary
//!
//! ```bash
//! LOOPS_API_KEY=... samwise-leads --bind 0.0.0.0:3000 --static-dir landing/dist
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use samwise_leads::config::{DEFAULT_BIND, DEFAULT_LOOPS_BASE_URL};
use samwise_leads::{LeadServer, LoopsClient, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "samwise-leads")]
#[command(about = "Lead-capture endpoint and static host for the Samwise site")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "SAMWISE_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// Loops API key
    #[arg(long, env = "LOOPS_API_KEY", hide_env_values = true)]
    loops_api_key: String,

    /// Loops API root
    #[arg(long, env = "LOOPS_BASE_URL", default_value = DEFAULT_LOOPS_BASE_URL)]
    loops_base_url: String,

    /// Built site to serve for non-API paths
    #[arg(long, env = "SAMWISE_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting samwise-leads v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::new(args.bind, args.loops_api_key)
        .with_loops_base_url(args.loops_base_url)
        .with_static_dir(args.static_dir);

    let loops = LoopsClient::new(
        &config.loops_base_url,
        &config.loops_api_key,
        config.upstream_timeout,
    )
    .context("failed to build Loops client")?;

    let server = LeadServer::bind(&config, loops)?;
    let shutdown = server.shutdown_handle();
    match server.local_addr() {
        Some(addr) => info!("Listening on http://{}", addr),
        None => info!("Listening on {}", config.bind),
    }
    if let Some(dir) = &config.static_dir {
        info!("Serving static site from {:?}", dir);
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
            shutdown.shutdown();
        }
    });

    server.run().await
}
