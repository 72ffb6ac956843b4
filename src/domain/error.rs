//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for pricestats.
#[derive(Debug, thiserror::Error)]
pub enum PriceStatsError {
    #[error("row {row} has {found} values, expected {expected} (one per ticker)")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{rows} rows given for {dates} dates")]
    RowCountMismatch { dates: usize, rows: usize },

    #[error("dates must be strictly increasing: {previous} is followed by {date}")]
    UnsortedDates { previous: NaiveDate, date: NaiveDate },

    #[error("duplicate ticker: {ticker}")]
    DuplicateTicker { ticker: String },

    #[error("ticker {ticker} already has a sector")]
    DuplicateSector { ticker: String },

    #[error("date {date} not found in price table")]
    DateNotFound { date: NaiveDate },

    #[error("ticker {ticker} not found in price table")]
    TickerNotFound { ticker: String },

    #[error("no sector mapped for ticker {ticker}")]
    SectorNotFound { ticker: String },

    #[error("insufficient data: have {observations} observations, need {minimum}")]
    InsufficientData { observations: usize, minimum: usize },

    #[error("return series has zero variance")]
    ZeroVariance,

    #[error("non-finite observation at index {index}")]
    NonFiniteObservation { index: usize },

    #[error("distribution error: {reason}")]
    Distribution { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },
}

impl PriceStatsError {
    pub(crate) fn config_missing(section: &str, key: &str) -> Self {
        PriceStatsError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn config_invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        PriceStatsError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
