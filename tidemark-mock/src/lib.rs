//! Deterministic dashboard metric series for tests and demos.
//!
//! Every fixture is a daily, millisecond-stamped UTC series starting on
//! 2024-01-01 unless noted otherwise, so week and month boundaries are known
//! in advance: Sundays fall on 2024-01-07, 01-14, ..., and the month ends
//! covered are 2024-01-31 and 2024-02-29.
use std::collections::BTreeMap;

use tidemark_core::TimePoint;

mod fixtures;

pub use fixtures::midnight_ms;

/// Mock metric source. Provides deterministic data from static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Names accepted by [`MockSource::series`] that yield valid data.
    #[must_use]
    pub const fn metric_names(&self) -> &'static [&'static str] {
        fixtures::metrics::NAMES
    }

    /// A metric series by name.
    ///
    /// `"unsorted"` and `"nan"` return deliberately invalid series for
    /// exercising error paths.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<Vec<TimePoint>> {
        fixtures::metrics::by_name(name).or_else(|| fixtures::broken::by_name(name))
    }

    /// Treasury balance per asset. `USDC` ends two days before the others.
    #[must_use]
    pub fn treasury_by_asset(&self) -> BTreeMap<String, Vec<TimePoint>> {
        fixtures::treasury::all()
    }

    /// Timestamp to use as "now" with the fixtures: 2024-03-20, the last day of
    /// the full-length series.
    #[must_use]
    pub fn now(&self) -> i64 {
        midnight_ms("2024-03-20")
    }
}
