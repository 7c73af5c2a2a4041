//! Alpha ticker proxy.
//!
//! ```text
//!   Client ──GET /──▶ ┌──────────────────────────────┐ ──GET ticker──▶ Binance
//!                     │ CORS/cache headers           │                 alpha-trade
//!                     │ validate → map → sort → top N│ ◀──{code,data}── endpoint
//!   Client ◀──JSON─── └──────────────────────────────┘
//! ```
//!
//! OPTIONS short-circuits with an empty 200. Any upstream or transform
//! failure becomes a 500 with a `Fetch Failed` JSON body.

use clap::Parser;
use std::path::PathBuf;

use alpha_ticker_proxy::lifecycle::startup;
use alpha_ticker_proxy::Shutdown;

#[derive(Parser)]
#[command(name = "alpha-ticker-proxy")]
#[command(about = "Top alpha-trade tickers by quote volume, served over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = startup::Overrides {
        bind: cli.bind.as_deref(),
        limit: None,
    };
    let config = startup::resolve_config(cli.config.as_deref(), overrides)?;
    let shutdown = Shutdown::new();
    startup::run(config, &shutdown).await?;

    Ok(())
}
