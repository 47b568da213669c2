//! tidemark-core
//!
//! Pure, synchronous functions that turn raw `{timestamp, value}` series into
//! chart-ready bars.
//!
//! - `timeseries::aggregate`: day/week/month bucketing with `Sum` or `Last`
//!   values and a trailing point for the still-open bucket.
//! - `timeseries::calendar`: boundary predicates in UTC, a fixed offset, or an
//!   IANA timezone.
//! - `timeseries::range`: trailing chart windows (7d, 30d, 90d, 1y, all).
//! - `timeseries::merge`: stacking of series that share timestamps.
//!
//! Every function borrows its input and returns a fresh vector, so calls can
//! run concurrently from any number of threads.
#![warn(missing_docs)]

/// Time-series utilities for bucketing, filtering and stacking.
pub mod timeseries;

pub use tidemark_types::{
    AggregationPolicy, BucketSize, BucketerConfig, CalendarZone, ChartRange, TidemarkError,
    TimePoint, TimeUnit,
};
pub use timeseries::aggregate::{aggregate, aggregate_with_config};
pub use timeseries::calendar::{is_boundary, last_day_of_month, local_date};
pub use timeseries::merge::merge_series;
pub use timeseries::range::filter_for_range;
pub use timeseries::util::{ensure_finite, ensure_sorted, total};
