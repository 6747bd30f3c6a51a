//! Yahoo Finance market data provider

use crate::error::{BoardError, Result};
use crate::model::{CompanyProfile, PricePoint};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

/// Quote endpoint used for company profiles; the chart endpoints behind
/// `yahoo_finance_api` expose no descriptive fields
const QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Production [`MarketData`](crate::api::MarketData) implementation backed
/// by Yahoo Finance
pub struct YahooMarketData {
    connector: yahoo::YahooConnector,
    http: reqwest::Client,
}

/// Envelope of the quote endpoint response
#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    result: Option<Vec<QuoteSummary>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    symbol: String,
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
}

impl YahooMarketData {
    /// Create a new provider with the given HTTP timeout
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| BoardError::Provider(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self { connector, http })
    }

    fn to_price_point(quote: &yahoo::Quote) -> PricePoint {
        PricePoint {
            timestamp: DateTime::from_timestamp(quote.timestamp as i64, 0)
                .unwrap_or_else(Utc::now),
            open: quote.open,
            high: quote.high,
            low: quote.low,
            close: quote.close,
            volume: quote.volume,
        }
    }
}

#[async_trait]
impl super::MarketData for YahooMarketData {
    async fn latest_session(&self, symbol: &str) -> Result<Option<PricePoint>> {
        let response = match self.connector.get_latest_quotes(symbol, "1d").await {
            Ok(response) => response,
            // Unknown or delisted symbols are absence, not failure
            Err(
                yahoo::YahooError::NoResult
                | yahoo::YahooError::NoQuotes
                | yahoo::YahooError::FetchFailed(_),
            ) => {
                tracing::debug!(symbol, "no session data");
                return Ok(None);
            }
            Err(e) => return Err(BoardError::Provider(e.to_string())),
        };

        match response.last_quote() {
            Ok(quote) => Ok(Some(Self::to_price_point(&quote))),
            Err(_) => Ok(None),
        }
    }

    async fn daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>> {
        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| BoardError::Provider(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| BoardError::Provider(format!("Invalid end timestamp: {e}")))?;

        let response = match self
            .connector
            .get_quote_history(symbol, start_odt, end_odt)
            .await
        {
            Ok(response) => response,
            Err(
                yahoo::YahooError::NoResult
                | yahoo::YahooError::NoQuotes
                | yahoo::YahooError::FetchFailed(_),
            ) => {
                tracing::debug!(symbol, "no history for span");
                return Ok(Vec::new());
            }
            Err(e) => return Err(BoardError::Provider(e.to_string())),
        };

        match response.quotes() {
            Ok(quotes) => Ok(quotes.iter().map(Self::to_price_point).collect()),
            Err(_) => Ok(Vec::new()),
        }
    }

    async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>> {
        let response = self
            .http
            .get(QUOTE_URL)
            .query(&[("symbols", symbol)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BoardError::Provider(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let envelope: QuoteEnvelope = response.json().await?;

        let summary = envelope
            .quote_response
            .result
            .and_then(|results| results.into_iter().next());

        match summary {
            Some(summary) => Ok(Some(CompanyProfile {
                symbol: summary.symbol,
                long_name: summary.long_name,
                market_cap: summary.market_cap,
            })),
            None => {
                tracing::debug!(symbol, "no profile in quote response");
                Ok(None)
            }
        }
    }
}
