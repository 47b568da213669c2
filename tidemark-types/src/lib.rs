//! Tidemark data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod bucket;
mod config;
mod error;
mod point;

pub use bucket::{AggregationPolicy, BucketSize, ChartRange};
pub use config::{BucketerConfig, CalendarZone, TimeUnit};
pub use error::TidemarkError;
pub use point::TimePoint;
