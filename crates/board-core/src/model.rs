//! Data records produced by the aggregation core

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One trading session's OHLC data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Descriptive company profile reported by the data source
///
/// Fields are optional because the source can return partial data for
/// thinly covered symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub long_name: Option<String>,
    pub market_cap: Option<f64>,
}

/// Direction of the session move, as shown in the price table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "Up"),
            Trend::Down => write!(f, "Down"),
        }
    }
}

/// One row of the price table, recomputed on every query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub company: String,
    pub ticker: String,
    pub current_price: f64,
    pub opening_price: f64,
    /// current − opening
    pub price_delta: f64,
}

impl StockRecord {
    /// Classification used by the price table: `Up` iff the delta is positive
    pub fn trend(&self) -> Trend {
        if self.price_delta > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// One point of a cumulative-return series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    /// Running sum of per-session percentage changes, in percent
    pub cumulative_return_pct: f64,
}

/// Percent change between two consecutive quarter-end closes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterChange {
    /// Quarter label, e.g. "2024-Q3"
    pub label: String,
    pub change_pct: f64,
}

/// Market capitalization snapshot for one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapSample {
    pub ticker: String,
    /// Raw capitalization divided by 1e9; 0.0 when the source reports none
    pub market_cap_billions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_classification() {
        let mut record = StockRecord {
            company: "Apple Inc.".to_string(),
            ticker: "AAPL".to_string(),
            current_price: 190.5,
            opening_price: 188.0,
            price_delta: 2.5,
        };
        assert_eq!(record.trend(), Trend::Up);

        record.price_delta = -1.25;
        assert_eq!(record.trend(), Trend::Down);

        // A flat session is not an advance
        record.price_delta = 0.0;
        assert_eq!(record.trend(), Trend::Down);
    }

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::Up.to_string(), "Up");
        assert_eq!(Trend::Down.to_string(), "Down");
    }
}
