//! Market data aggregation over a provider
//!
//! Turns raw per-ticker series from the provider into the normalized records
//! every visualization consumes. Stateless apart from the owned registry,
//! which only grows.

use crate::api::MarketData;
use crate::api::YahooMarketData;
use crate::cache::{CacheKey, CacheManager};
use crate::chart::{self, CandlePoint, CapSlice};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::metrics;
use crate::model::{MarketCapSample, PricePoint, QuarterChange, ReturnPoint, StockRecord};
use crate::registry::TickerRegistry;
use chrono::{NaiveTime, Utc};
use serde_json::json;

/// Aggregates current and historical market data for registered companies
pub struct MarketAggregator<P: MarketData> {
    provider: P,
    registry: TickerRegistry,
    config: BoardConfig,
    caches: CacheManager,
}

impl MarketAggregator<YahooMarketData> {
    /// Create an aggregator backed by Yahoo Finance
    pub fn with_yahoo(config: BoardConfig) -> Result<Self> {
        let provider = YahooMarketData::new(config.request_timeout)?;
        Ok(Self::new(provider, config))
    }
}

impl<P: MarketData> MarketAggregator<P> {
    /// Create an aggregator over the given provider, with the default
    /// company registry
    pub fn new(provider: P, config: BoardConfig) -> Self {
        Self::with_registry(provider, config, TickerRegistry::new())
    }

    /// Create an aggregator over a registry owned by the calling session
    pub fn with_registry(provider: P, config: BoardConfig, registry: TickerRegistry) -> Self {
        let caches = CacheManager::new(config.cache_ttl_quotes, config.cache_ttl_history);
        Self {
            provider,
            registry,
            config,
            caches,
        }
    }

    /// The registry owned by this aggregator
    pub fn registry(&self) -> &TickerRegistry {
        &self.registry
    }

    /// The active configuration
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Register a user-supplied ticker symbol
    ///
    /// The symbol is upper-cased first. A symbol already present returns its
    /// display name without touching the network. Otherwise the provider
    /// profile decides: a long name registers and returns it, no name fails
    /// with [`BoardError::InvalidTicker`] and leaves the registry unchanged.
    pub async fn register_ticker(&mut self, symbol: &str) -> Result<String> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(BoardError::InvalidTicker(symbol));
        }

        if let Some(name) = self.registry.name_for(&symbol) {
            tracing::debug!(%symbol, "symbol already registered");
            return Ok(name.to_string());
        }

        let profile = self.provider.profile(&symbol).await?;
        let Some(name) = profile.and_then(|p| p.long_name) else {
            return Err(BoardError::InvalidTicker(symbol));
        };

        if self.registry.insert(name.clone(), symbol.clone()) {
            tracing::info!(%symbol, company = %name, "registered ticker");
        }
        Ok(name)
    }

    /// Most recent trading session for a ticker, None when the source has
    /// no data for it
    pub async fn latest_session(&self, ticker: &str) -> Result<Option<PricePoint>> {
        let key = CacheKey::new(ticker, "latest", json!({}));
        let value = self
            .caches
            .quotes
            .get_or_fetch(key, || async {
                let session = self.provider.latest_session(ticker).await?;
                Ok::<_, BoardError>(serde_json::to_value(session)?)
            })
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    /// Build one price-table row per selected identifier
    ///
    /// An empty selection means every registered company, in registry order.
    /// Identifiers resolve through the registry with raw symbols passing
    /// through. Entities without session data are skipped, and one entity's
    /// provider failure never aborts the batch.
    pub async fn stock_records(&self, identifiers: &[String]) -> Result<Vec<StockRecord>> {
        let selected: Vec<&str> = if identifiers.is_empty() {
            self.registry.names().collect()
        } else {
            identifiers.iter().map(String::as_str).collect()
        };

        let mut records = Vec::with_capacity(selected.len());
        for identifier in selected {
            let symbol = self.registry.resolve(identifier);

            let session = match self.latest_session(symbol).await {
                Ok(Some(session)) => session,
                Ok(None) => {
                    tracing::debug!(%symbol, "skipping row without session data");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "skipping row after provider failure");
                    continue;
                }
            };

            records.push(StockRecord {
                company: identifier.to_string(),
                ticker: symbol.to_string(),
                current_price: session.close,
                opening_price: session.open,
                price_delta: session.close - session.open,
            });
        }

        Ok(records)
    }

    /// Daily sessions over the trailing configured span, empty when the
    /// source has no data
    pub async fn history(&self, ticker: &str) -> Result<Vec<PricePoint>> {
        let key = CacheKey::new(ticker, "history", json!({"days": self.config.history_days}));
        let value = self
            .caches
            .history
            .get_or_fetch(key, || async {
                let end = Utc::now();
                let start = end - chrono::Duration::days(self.config.history_days);
                let history = self.provider.daily_history(ticker, start, end).await?;
                Ok::<_, BoardError>(serde_json::to_value(history)?)
            })
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    /// Cumulative return series over the trailing span for a ticker
    pub async fn return_series(&self, ticker: &str) -> Result<Vec<ReturnPoint>> {
        let history = self.history(ticker).await?;
        Ok(metrics::cumulative_returns(&history))
    }

    /// Quarter-over-quarter percent changes over the trailing span
    pub async fn quarterly_changes(&self, ticker: &str) -> Result<Vec<QuarterChange>> {
        let history = self.history(ticker).await?;
        Ok(metrics::quarterly_changes(&history))
    }

    /// Market capitalization snapshot per identifier, in input order
    ///
    /// Identifiers resolve through the registry. A missing cap field, an
    /// unknown symbol, and a failed lookup all degrade to 0.0 so one bad
    /// ticker cannot abort the batch.
    pub async fn market_caps(&self, identifiers: &[String]) -> Result<Vec<MarketCapSample>> {
        let mut samples = Vec::with_capacity(identifiers.len());
        for identifier in identifiers {
            let symbol = self.registry.resolve(identifier);

            let market_cap_billions = match self.provider.profile(symbol).await {
                Ok(Some(profile)) => profile.market_cap.unwrap_or(0.0) / 1e9,
                Ok(None) => 0.0,
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "market cap lookup failed");
                    0.0
                }
            };

            samples.push(MarketCapSample {
                ticker: symbol.to_string(),
                market_cap_billions,
            });
        }

        Ok(samples)
    }

    /// Donut-ready market-cap slices with group weights, in input order
    pub async fn cap_slices(&self, identifiers: &[String]) -> Result<Vec<CapSlice>> {
        let samples = self.market_caps(identifiers).await?;
        Ok(chart::cap_slices(&samples))
    }

    /// Candlestick points for the configured index over its fixed window
    ///
    /// No data renders as an empty chart downstream, so an empty vec is
    /// returned rather than an error.
    pub async fn index_candles(&self) -> Result<Vec<CandlePoint>> {
        let start = self.config.index_start.and_time(NaiveTime::MIN).and_utc();
        let end = self.config.index_end.and_time(NaiveTime::MIN).and_utc();

        let history = self
            .provider
            .daily_history(&self.config.index_symbol, start, end)
            .await?;

        Ok(chart::candle_points(&history))
    }
}
