//! The raw observation type shared by every tidemark API.

use serde::{Deserialize, Serialize};

/// A single time-stamped observation.
///
/// `timestamp` is epoch milliseconds or epoch seconds; which one is decided by
/// the caller's [`TimeUnit`](crate::TimeUnit) and must be consistent within a
/// series. Aggregated outputs reuse this type: an output point carries the
/// timestamp of the input point that closed its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Epoch timestamp in the series' time unit.
    pub timestamp: i64,
    /// Observed or aggregated value.
    pub value: f64,
}

impl TimePoint {
    /// Create a point.
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Copy of this point with a different value and the same timestamp.
    #[must_use]
    pub const fn with_value(self, value: f64) -> Self {
        Self {
            timestamp: self.timestamp,
            value,
        }
    }
}

impl From<(i64, f64)> for TimePoint {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Self { timestamp, value }
    }
}
