//! Error types for market data aggregation

use thiserror::Error;

/// Aggregation-specific errors
///
/// Missing market data is not an error: session and history lookups return
/// `Ok(None)` / empty collections so batch callers can skip the entity.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Symbol could not be described by the data source (no company name)
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    /// Market data provider failed for a reason other than "no data"
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for aggregation operations
pub type Result<T> = std::result::Result<T, BoardError>;
