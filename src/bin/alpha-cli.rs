use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use alpha_ticker_proxy::lifecycle::startup::{resolve_config, Overrides};
use alpha_ticker_proxy::{fetch_top_tickers, AlphaClient, OutputTickerRecord};

#[derive(Parser)]
#[command(name = "alpha-cli")]
#[command(about = "Inspect alpha-trade tickers directly or through a running proxy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the upstream once and print the ranked tickers
    Fetch {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the number of entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// GET a running proxy and pretty-print its response
    Query {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { config, limit, json } => {
            let overrides = Overrides { bind: None, limit };
            let config = resolve_config(config.as_deref(), overrides)?;

            let client = AlphaClient::new(config.upstream.clone())?;
            let top = fetch_top_tickers(&client, &config.ranking).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&top)?);
            } else {
                print_table(&top);
            }
        }
        Commands::Query { url } => {
            let res = reqwest::Client::new().get(&url).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn print_table(rows: &[OutputTickerRecord]) {
    println!(
        "{:<4} {:<14} {:<10} {:>16} {:>9} {:>20}",
        "#", "SYMBOL", "BASE", "LAST", "CHG %", "QUOTE VOLUME"
    );
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:<4} {:<14} {:<10} {:>16} {:>9} {:>20.2}",
            rank + 1,
            row.symbol,
            row.base_asset,
            row.last_price,
            row.price_change_percent,
            row.quote_volume
        );
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
