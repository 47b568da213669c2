//! Tidemark turns raw `{timestamp, value}` series into chart-ready bars.
//!
//! Overview
//! - Collapses ascending series into day, week or month buckets.
//! - `Sum` conserves totals for flow metrics (revenue, incentives, OEV);
//!   `Last` keeps period-end levels for stock metrics (treasury, runway).
//! - Appends one trailing point for the still-open bucket so a chart reaches
//!   the latest observation instead of stopping at the last completed period.
//! - Trims series to trailing chart windows and stacks keyed series.
//!
//! Key behaviors and trade-offs
//! - Boundaries are calendar predicates, not rolling windows: a week closes on
//!   a Sunday and a month on its last calendar day. Gaps in the data can merge
//!   two periods into one bar.
//! - Output timestamps are those of the closing input points, never rounded
//!   calendar dates.
//! - Input is validated by default (ascending order, finite values); the
//!   checks can be disabled for data validated upstream.
//!
//! Examples
//! Building a bucketer and aggregating a revenue series:
//! ```rust
//! use tidemark::{AggregationPolicy, Bucketer, BucketSize, TimePoint};
//!
//! const DAY: i64 = 86_400_000;
//! let mon = 1_704_067_200_000; // 2024-01-01
//! let revenue: Vec<TimePoint> = (0..10).map(|i| TimePoint::new(mon + i * DAY, 2.0)).collect();
//!
//! let bucketer = Bucketer::builder()
//!     .bucket_size(BucketSize::Week)
//!     .policy(AggregationPolicy::Sum)
//!     .build()?;
//! let bars = bucketer.aggregate(&revenue)?;
//! // Sunday 2024-01-07 closes the first week; Wednesday 2024-01-10 is the open bucket.
//! assert_eq!(bars, vec![TimePoint::new(mon + 6 * DAY, 14.0), TimePoint::new(mon + 9 * DAY, 6.0)]);
//! # Ok::<(), tidemark::TidemarkError>(())
//! ```
//!
//! Stacking several sources into one chart:
//! ```rust,ignore
//! let stacked = bucketer.aggregate_compound(&by_asset)?;
//! for (asset, bars) in &stacked.series { /* one layer per asset */ }
//! let totals = stacked.total;
//! ```
#![warn(missing_docs)]

mod compound;
pub(crate) mod bucketer;

pub use compound::CompoundSeries;
pub use bucketer::{Bucketer, BucketerBuilder};

// Re-export core types for convenience
pub use tidemark_core::{
    AggregationPolicy, BucketSize, BucketerConfig, CalendarZone, ChartRange, TidemarkError,
    TimePoint, TimeUnit, aggregate, aggregate_with_config, filter_for_range, merge_series, total,
};
