//! Bucket sizes, aggregation policies and chart windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TidemarkError;

/// Calendar cadence of the bars produced by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSize {
    /// Every point closes its own bucket.
    #[default]
    Day,
    /// Buckets close on Sundays.
    Week,
    /// Buckets close on the last calendar day of a month.
    Month,
}

impl BucketSize {
    /// Every supported size, finest first.
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Lowercase name, identical to the serde form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for BucketSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketSize {
    type Err = TidemarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "d" | "daily" => Ok(Self::Day),
            "week" | "w" | "weekly" => Ok(Self::Week),
            "month" | "m" | "monthly" => Ok(Self::Month),
            other => Err(TidemarkError::invalid_arg(format!(
                "unknown bucket size '{other}'"
            ))),
        }
    }
}

/// How the value of a boundary point is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPolicy {
    /// Sum of every value since the previous boundary, inclusive.
    #[default]
    Sum,
    /// The boundary point's own value; earlier values in the bucket are dropped.
    ///
    /// Suited to balance-like series (treasury, runway) where the bar shows the
    /// level at the end of the period.
    Last,
}

impl AggregationPolicy {
    /// Every supported policy.
    pub const ALL: [Self; 2] = [Self::Sum, Self::Last];

    /// Lowercase name, identical to the serde form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationPolicy {
    type Err = TidemarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "last" => Ok(Self::Last),
            other => Err(TidemarkError::invalid_arg(format!(
                "unknown aggregation policy '{other}'"
            ))),
        }
    }
}

/// Trailing window shown by a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartRange {
    /// Last 7 days.
    #[serde(rename = "7d")]
    D7,
    /// Last 30 days.
    #[serde(rename = "30d")]
    D30,
    /// Last 90 days.
    #[serde(rename = "90d")]
    D90,
    /// Last 365 days.
    #[serde(rename = "1y")]
    Y1,
    /// Whole series.
    #[default]
    #[serde(rename = "all")]
    All,
}

impl ChartRange {
    /// Window length in days; `None` for [`ChartRange::All`].
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::D7 => Some(7),
            Self::D30 => Some(30),
            Self::D90 => Some(90),
            Self::Y1 => Some(365),
            Self::All => None,
        }
    }

    /// Bar size a chart uses by default for this window.
    ///
    /// Short windows show daily bars, a quarter shows weekly bars, and a year
    /// or more shows monthly bars.
    #[must_use]
    pub const fn default_bucket_size(self) -> BucketSize {
        match self {
            Self::D7 | Self::D30 => BucketSize::Day,
            Self::D90 => BucketSize::Week,
            Self::Y1 | Self::All => BucketSize::Month,
        }
    }

    /// Short label, identical to the serde form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D7 => "7d",
            Self::D30 => "30d",
            Self::D90 => "90d",
            Self::Y1 => "1y",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = TidemarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(Self::D7),
            "30d" => Ok(Self::D30),
            "90d" => Ok(Self::D90),
            "1y" | "365d" => Ok(Self::Y1),
            "all" | "max" => Ok(Self::All),
            other => Err(TidemarkError::invalid_arg(format!(
                "unknown chart range '{other}'"
            ))),
        }
    }
}
