//! Time-series utilities behind every tidemark chart.
//!
//! Modules include:
//! - `calendar`: map timestamps onto dates and evaluate bucket boundaries
//! - `aggregate`: collapse a series to day/week/month boundary points
//! - `range`: trim a series to a trailing chart window
//! - `merge`: stack several series into one
/// Bucket aggregation with trailing partial-bucket handling.
pub mod aggregate;
/// Calendar predicates for week and month boundaries.
pub mod calendar;
/// Summing merge of series that share timestamps.
pub mod merge;
/// Trailing-window filtering.
pub mod range;
pub mod util;
