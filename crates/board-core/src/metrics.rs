//! Derived metrics computed from historical price series
//!
//! Pure functions over chronologically ordered session data. Fetching is the
//! aggregator's job; nothing here touches the network.

use crate::model::{PricePoint, QuarterChange, ReturnPoint};
use chrono::Datelike;

/// Cumulative return series from a chronological session history
///
/// Each session's simple return (`close / prev_close − 1`) is accumulated
/// into a running sum, scaled to percent. The first session has no prior
/// close, so its undefined change is dropped rather than zero-filled: an
/// N-session history yields N−1 points, the first dated at the first session
/// with a predecessor.
pub fn cumulative_returns(history: &[PricePoint]) -> Vec<ReturnPoint> {
    let mut running = 0.0;
    let mut series = Vec::with_capacity(history.len().saturating_sub(1));

    for window in history.windows(2) {
        let prev_close = window[0].close;
        let session = &window[1];

        if prev_close > 0.0 {
            running += session.close / prev_close - 1.0;
        }

        series.push(ReturnPoint {
            date: session.timestamp.date_naive(),
            cumulative_return_pct: running * 100.0,
        });
    }

    series
}

/// Quarter-over-quarter percent changes from a chronological session history
///
/// Closes are resampled to the last session of each calendar quarter, then
/// consecutive quarter-end values are compared. The first quarter of the
/// span has no predecessor and is dropped, never zero-filled. Labels carry
/// the later quarter of each pair, formatted `"YYYY-Qn"`.
pub fn quarterly_changes(history: &[PricePoint]) -> Vec<QuarterChange> {
    let mut quarter_closes: Vec<((i32, u32), f64)> = Vec::new();

    for point in history {
        let date = point.timestamp.date_naive();
        let key = (date.year(), quarter_of(date.month()));

        match quarter_closes.last_mut() {
            Some((last_key, close)) if *last_key == key => *close = point.close,
            _ => quarter_closes.push((key, point.close)),
        }
    }

    quarter_closes
        .windows(2)
        .filter_map(|pair| {
            let (_, prev_close) = pair[0];
            let ((year, quarter), close) = pair[1];

            if prev_close > 0.0 {
                Some(QuarterChange {
                    label: format!("{year}-Q{quarter}"),
                    change_pct: (close / prev_close - 1.0) * 100.0,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Calendar quarter (1..=4) for a month number
fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn session(year: i32, month: u32, day: u32, close: f64) -> PricePoint {
        let timestamp = Utc
            .with_ymd_and_hms(year, month, day, 14, 30, 0)
            .single()
            .expect("valid session timestamp");
        PricePoint {
            timestamp,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_cumulative_returns_running_sum() {
        // closes 100 -> 110 -> 121: two simple returns of 10% each
        let history = vec![
            session(2024, 1, 2, 100.0),
            session(2024, 1, 3, 110.0),
            session(2024, 1, 4, 121.0),
        ];

        let series = cumulative_returns(&history);
        assert_eq!(series.len(), 2);

        assert!((series[0].cumulative_return_pct - 10.0).abs() < 1e-9);
        assert!((series[1].cumulative_return_pct - 20.0).abs() < 1e-9);
        assert_eq!(
            series[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_cumulative_returns_drops_first_session() {
        let history = vec![session(2024, 1, 2, 100.0), session(2024, 1, 3, 95.0)];
        let series = cumulative_returns(&history);

        assert_eq!(series.len(), 1);
        assert!((series[0].cumulative_return_pct - (-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_returns_empty_and_single() {
        assert!(cumulative_returns(&[]).is_empty());
        assert!(cumulative_returns(&[session(2024, 1, 2, 100.0)]).is_empty());
    }

    #[test]
    fn test_quarterly_changes_drops_leading_quarter() {
        let history = vec![
            session(2024, 2, 1, 100.0),
            session(2024, 3, 28, 120.0), // Q1 close
            session(2024, 5, 1, 110.0),
            session(2024, 6, 28, 150.0), // Q2 close
            session(2024, 9, 30, 135.0), // Q3 close
        ];

        let changes = quarterly_changes(&history);
        let labels: Vec<&str> = changes.iter().map(|c| c.label.as_str()).collect();

        // Q1 has no prior quarter and never appears
        assert_eq!(labels, vec!["2024-Q2", "2024-Q3"]);
        assert!((changes[0].change_pct - 25.0).abs() < 1e-9);
        assert!((changes[1].change_pct - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_quarterly_changes_uses_last_close_of_quarter() {
        let history = vec![
            session(2024, 1, 15, 80.0),
            session(2024, 3, 28, 100.0), // last Q1 session wins
            session(2024, 4, 10, 90.0),
            session(2024, 6, 27, 110.0), // last Q2 session wins
        ];

        let changes = quarterly_changes(&history);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].label, "2024-Q2");
        assert!((changes[0].change_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarterly_changes_spans_year_boundary() {
        let history = vec![
            session(2023, 12, 29, 200.0),
            session(2024, 3, 28, 220.0),
        ];

        let changes = quarterly_changes(&history);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].label, "2024-Q1");
        assert!((changes[0].change_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarterly_changes_single_quarter_is_empty() {
        let history = vec![session(2024, 1, 2, 100.0), session(2024, 2, 2, 120.0)];
        assert!(quarterly_changes(&history).is_empty());
    }

    #[test]
    fn test_quarter_of() {
        assert_eq!(quarter_of(1), 1);
        assert_eq!(quarter_of(3), 1);
        assert_eq!(quarter_of(4), 2);
        assert_eq!(quarter_of(12), 4);
    }
}
