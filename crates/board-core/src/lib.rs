//! Market data aggregation core for the tickerboard dashboard
//!
//! This crate turns raw per-ticker market data into the normalized records a
//! dashboard renders. It provides:
//!
//! - A company registry with display-name to symbol resolution and
//!   user-added tickers validated against the data source
//! - Current-price rows with delta and Up/Down classification
//! - Derived series: cumulative returns and quarterly percent changes over a
//!   trailing one-year history
//! - Market capitalization snapshots and donut-ready weight slices
//! - Index candlestick data over a fixed window
//!
//! Rendering, layout, and user input belong to the presentation layer; the
//! aggregator only produces data.
//!
//! # Example
//!
//! ```rust,ignore
//! use board_core::{BoardConfig, MarketAggregator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut aggregator = MarketAggregator::with_yahoo(BoardConfig::default())?;
//!
//!     // Validate and track a user-supplied symbol
//!     let name = aggregator.register_ticker("NFLX").await?;
//!     println!("added {name}");
//!
//!     // One row per registered company
//!     for record in aggregator.stock_records(&[]).await? {
//!         println!("{} {:+.2} ({})", record.ticker, record.price_delta, record.trend());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod registry;

// Re-export main types for convenience
pub use aggregator::MarketAggregator;
pub use api::{MarketData, YahooMarketData};
pub use chart::{CandlePoint, CapSlice};
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use model::{
    CompanyProfile, MarketCapSample, PricePoint, QuarterChange, ReturnPoint, StockRecord, Trend,
};
pub use registry::TickerRegistry;
