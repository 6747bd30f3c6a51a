//! Configuration for the aggregation core

use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for aggregation operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Trailing span of daily history fetches, in days
    pub history_days: i64,

    /// Symbol used for the index candlestick view
    pub index_symbol: String,

    /// Start of the fixed index candlestick window
    pub index_start: NaiveDate,

    /// End of the fixed index candlestick window
    pub index_end: NaiveDate,

    /// Cache TTL for latest-session quotes
    pub cache_ttl_quotes: Duration,

    /// Cache TTL for historical series
    pub cache_ttl_history: Duration,

    /// Request timeout for the profile HTTP client
    pub request_timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            history_days: 365,
            index_symbol: "^GSPC".to_string(),
            index_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN),
            index_end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX),
            cache_ttl_quotes: Duration::from_secs(60),
            cache_ttl_history: Duration::from_secs(3600),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl BoardConfig {
    /// Create a new configuration builder
    pub fn builder() -> BoardConfigBuilder {
        BoardConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.history_days <= 0 {
            return Err(BoardError::Config(
                "history_days must be positive".to_string(),
            ));
        }

        if self.index_start >= self.index_end {
            return Err(BoardError::Config(
                "index window start must precede its end".to_string(),
            ));
        }

        if self.index_symbol.is_empty() {
            return Err(BoardError::Config(
                "index_symbol must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for BoardConfig
#[derive(Debug, Default)]
pub struct BoardConfigBuilder {
    history_days: Option<i64>,
    index_symbol: Option<String>,
    index_start: Option<NaiveDate>,
    index_end: Option<NaiveDate>,
    cache_ttl_quotes: Option<Duration>,
    cache_ttl_history: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl BoardConfigBuilder {
    /// Set the trailing history span in days
    pub fn history_days(mut self, days: i64) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Set the index candlestick symbol
    pub fn index_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.index_symbol = Some(symbol.into());
        self
    }

    /// Set the fixed index candlestick window
    pub fn index_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.index_start = Some(start);
        self.index_end = Some(end);
        self
    }

    /// Set cache TTL for latest-session quotes
    pub fn cache_ttl_quotes(mut self, duration: Duration) -> Self {
        self.cache_ttl_quotes = Some(duration);
        self
    }

    /// Set cache TTL for historical series
    pub fn cache_ttl_history(mut self, duration: Duration) -> Self {
        self.cache_ttl_history = Some(duration);
        self
    }

    /// Set the profile HTTP client request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BoardConfig> {
        let defaults = BoardConfig::default();

        let config = BoardConfig {
            history_days: self.history_days.unwrap_or(defaults.history_days),
            index_symbol: self.index_symbol.unwrap_or(defaults.index_symbol),
            index_start: self.index_start.unwrap_or(defaults.index_start),
            index_end: self.index_end.unwrap_or(defaults.index_end),
            cache_ttl_quotes: self.cache_ttl_quotes.unwrap_or(defaults.cache_ttl_quotes),
            cache_ttl_history: self.cache_ttl_history.unwrap_or(defaults.cache_ttl_history),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.history_days, 365);
        assert_eq!(config.index_symbol, "^GSPC");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::builder()
            .history_days(180)
            .index_symbol("^DJI")
            .request_timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.history_days, 180);
        assert_eq!(config.index_symbol, "^DJI");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_validation_rejects_zero_span() {
        let result = BoardConfig::builder().history_days(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_window() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let result = BoardConfig::builder().index_window(start, end).build();
        assert!(result.is_err());
    }
}
