//! Terminal front end for the tickerboard aggregation core
//!
//! Renders aggregator output as tables and listings; all data comes from
//! `board-core`, all charts beyond the terminal belong to richer consumers.
//!
//! # Usage
//!
//! ```bash
//! # Price table for the default companies
//! cargo run --bin board -p board-cli -- quotes
//!
//! # Cumulative returns for one ticker
//! cargo run --bin board -p board-cli -- returns NVDA
//! ```

use anyhow::Context;
use board_core::{BoardConfig, MarketAggregator, Trend, YahooMarketData};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use std::env;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "board")]
#[command(about = "Market dashboard data in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered companies and their symbols
    Companies,
    /// Price table for selected companies (all registered when empty)
    Quotes {
        /// Company names or raw ticker symbols
        identifiers: Vec<String>,
    },
    /// Cumulative return series over the trailing year
    Returns {
        /// Company name or raw ticker symbol
        identifier: String,
    },
    /// Quarter-over-quarter percent changes over the trailing year
    Quarters {
        /// Company name or raw ticker symbol
        identifier: String,
    },
    /// Market capitalization shares (all registered when empty)
    Caps {
        /// Company names or raw ticker symbols
        identifiers: Vec<String>,
    },
    /// Candlestick data for the configured index window
    Index,
    /// Validate a ticker symbol against the data source and register it
    Add {
        /// Ticker symbol, e.g. AAPL
        symbol: String,
    },
}

fn all_registered(aggregator: &MarketAggregator<YahooMarketData>) -> Vec<String> {
    aggregator
        .registry()
        .names()
        .map(str::to_string)
        .collect()
}

async fn run(aggregator: &mut MarketAggregator<YahooMarketData>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Companies => {
            let mut table = Table::new();
            table.set_header(vec!["Company", "Ticker"]);
            for entry in aggregator.registry().iter() {
                table.add_row(vec![entry.name.clone(), entry.symbol.clone()]);
            }
            println!("{table}");
        }

        Command::Quotes { identifiers } => {
            let records = aggregator.stock_records(&identifiers).await?;
            if records.is_empty() {
                println!("No session data for the selected companies.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Company", "Ticker", "Price", "Open", "Change", "Status"]);
            for record in &records {
                table.add_row(vec![
                    record.company.clone(),
                    record.ticker.clone(),
                    format!("${:.2}", record.current_price),
                    format!("${:.2}", record.opening_price),
                    format!("{:+.2}", record.price_delta),
                    record.trend().to_string(),
                ]);
            }
            println!("{table}");

            let advancing = records.iter().filter(|r| r.trend() == Trend::Up).count();
            info!(rows = records.len(), advancing, "rendered price table");
        }

        Command::Returns { identifier } => {
            let ticker = aggregator.registry().resolve(&identifier).to_string();
            let series = aggregator.return_series(&ticker).await?;
            if series.is_empty() {
                println!("No history for {ticker}.");
                return Ok(());
            }

            println!("{ticker} cumulative returns (%):");
            for point in &series {
                println!("{}  {:+.2}", point.date, point.cumulative_return_pct);
            }
        }

        Command::Quarters { identifier } => {
            let ticker = aggregator.registry().resolve(&identifier).to_string();
            let changes = aggregator.quarterly_changes(&ticker).await?;
            if changes.is_empty() {
                println!("Not enough history for {ticker} to compare quarters.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Quarter", "Change (%)"]);
            for change in &changes {
                table.add_row(vec![change.label.clone(), format!("{:+.2}", change.change_pct)]);
            }
            println!("{ticker} quarterly performance:");
            println!("{table}");
        }

        Command::Caps { identifiers } => {
            let selection = if identifiers.is_empty() {
                all_registered(aggregator)
            } else {
                identifiers
            };

            let slices = aggregator.cap_slices(&selection).await?;
            let mut table = Table::new();
            table.set_header(vec!["Ticker", "Market Cap ($B)", "Weight (%)"]);
            for slice in &slices {
                table.add_row(vec![
                    slice.ticker.clone(),
                    format!("{:.1}", slice.market_cap_billions),
                    format!("{:.1}", slice.weight_pct),
                ]);
            }
            println!("{table}");
        }

        Command::Index => {
            let symbol = aggregator.config().index_symbol.clone();
            let candles = aggregator.index_candles().await?;
            if candles.is_empty() {
                println!("No index data for {symbol}.");
                return Ok(());
            }

            println!(
                "{symbol}: {} sessions from {} to {}",
                candles.len(),
                candles[0].timestamp.date_naive(),
                candles[candles.len() - 1].timestamp.date_naive(),
            );

            let mut table = Table::new();
            table.set_header(vec!["Date", "Open", "High", "Low", "Close"]);
            for candle in candles.iter().rev().take(10).rev() {
                table.add_row(vec![
                    candle.timestamp.date_naive().to_string(),
                    format!("{:.2}", candle.open),
                    format!("{:.2}", candle.high),
                    format!("{:.2}", candle.low),
                    format!("{:.2}", candle.close),
                ]);
            }
            println!("{table}");
        }

        Command::Add { symbol } => {
            let name = aggregator
                .register_ticker(&symbol)
                .await
                .with_context(|| format!("could not register {symbol}"))?;
            println!("Registered {name} ({})", symbol.to_uppercase());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,board_core=info".to_string()),
        )
        .init();

    let cli = Cli::parse();

    let mut aggregator = MarketAggregator::with_yahoo(BoardConfig::default())
        .context("could not initialize the market data provider")?;

    run(&mut aggregator, cli.command).await
}
