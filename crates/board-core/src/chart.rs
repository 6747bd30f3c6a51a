//! Chart-ready data shaping
//!
//! Rendering belongs to the presentation layer; these functions only reshape
//! aggregator output into the structures chart consumers expect.

use crate::model::{MarketCapSample, PricePoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candlestick of an OHLC chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One slice of the market-cap donut: a ticker's share of the group total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapSlice {
    pub ticker: String,
    pub market_cap_billions: f64,
    /// Share of the selected group's total capitalization, in percent
    pub weight_pct: f64,
}

/// Shape a session history into candlestick points
pub fn candle_points(history: &[PricePoint]) -> Vec<CandlePoint> {
    history
        .iter()
        .map(|point| CandlePoint {
            timestamp: point.timestamp,
            open: point.open,
            high: point.high,
            low: point.low,
            close: point.close,
        })
        .collect()
}

/// Shape market-cap samples into donut slices with group weights
///
/// A zero group total leaves every weight at 0 rather than dividing by it.
pub fn cap_slices(samples: &[MarketCapSample]) -> Vec<CapSlice> {
    let total: f64 = samples.iter().map(|s| s.market_cap_billions).sum();

    samples
        .iter()
        .map(|sample| CapSlice {
            ticker: sample.ticker.clone(),
            market_cap_billions: sample.market_cap_billions,
            weight_pct: if total > 0.0 {
                sample.market_cap_billions / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(ticker: &str, billions: f64) -> MarketCapSample {
        MarketCapSample {
            ticker: ticker.to_string(),
            market_cap_billions: billions,
        }
    }

    #[test]
    fn test_candle_points_preserve_ohlc() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).single().unwrap();
        let history = vec![PricePoint {
            timestamp,
            open: 100.0,
            high: 105.0,
            low: 99.0,
            close: 104.0,
            volume: 2_000,
        }];

        let candles = candle_points(&history);
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].open, 100.0);
        assert_eq!(candles[0].high, 105.0);
        assert_eq!(candles[0].low, 99.0);
        assert_eq!(candles[0].close, 104.0);
    }

    #[test]
    fn test_cap_slices_weights_sum_to_hundred() {
        let slices = cap_slices(&[sample("AAPL", 3000.0), sample("MSFT", 1000.0)]);

        assert_eq!(slices.len(), 2);
        assert!((slices[0].weight_pct - 75.0).abs() < 1e-9);
        assert!((slices[1].weight_pct - 25.0).abs() < 1e-9);

        let total: f64 = slices.iter().map(|s| s.weight_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cap_slices_zero_total() {
        let slices = cap_slices(&[sample("AAA", 0.0), sample("BBB", 0.0)]);
        assert!(slices.iter().all(|s| s.weight_pct == 0.0));
    }

    #[test]
    fn test_cap_slices_keep_input_order() {
        let slices = cap_slices(&[sample("TSM", 500.0), sample("JNJ", 400.0)]);
        let tickers: Vec<&str> = slices.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["TSM", "JNJ"]);
    }
}
