use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tidemark workspace.
///
/// Covers input contract violations (ordering, non-finite values, timestamps
/// outside the calendar range), configuration problems, and failures of a
/// single key inside a compound aggregation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TidemarkError {
    /// Input series is not sorted ascending by timestamp.
    #[error("series not sorted at index {index}: {current} follows {previous}")]
    Unsorted {
        /// Index of the first point that is older than its predecessor.
        index: usize,
        /// Timestamp of the predecessor.
        previous: i64,
        /// Timestamp of the offending point.
        current: i64,
    },

    /// A point carries a NaN or infinite value.
    #[error("non-finite value at index {index} (timestamp {timestamp})")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
        /// Timestamp of the offending point.
        timestamp: i64,
    },

    /// A timestamp cannot be mapped onto a calendar date.
    #[error("timestamp out of calendar range: {timestamp}")]
    TimestampOutOfRange {
        /// The raw timestamp as supplied by the caller.
        timestamp: i64,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Aggregating one key of a compound series failed.
    #[error("series '{key}' failed: {source}")]
    Series {
        /// Key of the series that failed.
        key: String,
        /// Underlying failure.
        source: Box<TidemarkError>,
    },
}

impl TidemarkError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: tag an error with the compound series key it belongs to.
    pub fn series(key: impl Into<String>, source: Self) -> Self {
        Self::Series {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Returns true if the error reports a violation of the input contract
    /// (ordering, finiteness, calendar range) rather than a configuration issue.
    ///
    /// `Series` wrappers are classified by their inner error.
    #[must_use]
    pub fn is_input_violation(&self) -> bool {
        match self {
            Self::Unsorted { .. } | Self::NonFinite { .. } | Self::TimestampOutOfRange { .. } => {
                true
            }
            Self::Series { source, .. } => source.is_input_violation(),
            Self::InvalidArg(_) => false,
        }
    }

    /// Strip any `Series` wrappers and return the innermost error.
    #[must_use]
    pub fn into_root(self) -> Self {
        match self {
            Self::Series { source, .. } => source.into_root(),
            other => other,
        }
    }
}
