//! Configuration types shared by the core functions and the `Bucketer` facade.

use serde::{Deserialize, Serialize};

use crate::{AggregationPolicy, BucketSize, TidemarkError};

const SECONDS_PER_DAY: i64 = 86_400;

/// Unit of `TimePoint::timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Epoch seconds.
    Seconds,
    /// Epoch milliseconds.
    #[default]
    Millis,
}

impl TimeUnit {
    /// Number of timestamp ticks in one day.
    #[must_use]
    pub const fn ticks_per_day(self) -> i64 {
        match self {
            Self::Seconds => SECONDS_PER_DAY,
            Self::Millis => SECONDS_PER_DAY * 1_000,
        }
    }
}

/// Calendar in which day-of-week and day-of-month are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarZone {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// Constant offset east of UTC.
    FixedOffset {
        /// Offset in seconds; must satisfy `|seconds| < 86_400`.
        seconds: i32,
    },
    /// IANA timezone with daylight-saving rules.
    Named(chrono_tz::Tz),
}

impl CalendarZone {
    /// Check that the zone can be turned into a chrono offset.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a fixed offset is a day or more away from UTC.
    pub fn validate(&self) -> Result<(), TidemarkError> {
        if let Self::FixedOffset { seconds } = *self
            && i64::from(seconds).abs() >= SECONDS_PER_DAY
        {
            return Err(TidemarkError::invalid_arg(format!(
                "utc offset out of range: {seconds}s"
            )));
        }
        Ok(())
    }
}

/// Full configuration of an aggregation call.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketerConfig {
    /// Cadence of output bars.
    pub bucket_size: BucketSize,
    /// Value assigned to a boundary point.
    pub policy: AggregationPolicy,
    /// Unit of input timestamps.
    pub time_unit: TimeUnit,
    /// Calendar used by the week and month boundary tests.
    pub zone: CalendarZone,
    /// Reject input that is not sorted ascending by timestamp.
    pub validate_order: bool,
    /// Reject NaN and infinite values.
    pub reject_non_finite: bool,
}

impl Default for BucketerConfig {
    fn default() -> Self {
        Self {
            bucket_size: BucketSize::Day,
            policy: AggregationPolicy::Sum,
            time_unit: TimeUnit::Millis,
            zone: CalendarZone::Utc,
            validate_order: true,
            reject_non_finite: true,
        }
    }
}

impl BucketerConfig {
    /// Default configuration with the given size and policy.
    #[must_use]
    pub fn new(bucket_size: BucketSize, policy: AggregationPolicy) -> Self {
        Self {
            bucket_size,
            policy,
            ..Self::default()
        }
    }

    /// Validate every field that can be out of range.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the zone is invalid.
    pub fn validate(&self) -> Result<(), TidemarkError> {
        self.zone.validate()
    }
}
