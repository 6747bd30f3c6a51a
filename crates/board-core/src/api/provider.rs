//! Provider seam between the aggregator and the upstream data source

use crate::error::Result;
use crate::model::{CompanyProfile, PricePoint};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Upstream market data source
///
/// The source is treated as slow and unreliable: it can return nothing for
/// a valid-looking symbol and partial fields in a profile. Absence of data
/// is `Ok(None)` / `Ok(vec![])`; only transport-level and malformed-response
/// failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Most recent single trading session, or None when the source has no
    /// session data for the symbol
    async fn latest_session(&self, symbol: &str) -> Result<Option<PricePoint>>;

    /// Daily sessions over [start, end], chronological; empty when the
    /// source has no data for the symbol or span
    async fn daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>>;

    /// Descriptive profile for the symbol, or None when the source does not
    /// know it
    async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>>;
}
