use crate::timeseries::calendar::is_boundary;
use crate::timeseries::util::{ensure_finite, ensure_sorted};
use crate::{AggregationPolicy, BucketSize, BucketerConfig, TidemarkError, TimePoint};

/// Collapse an ascending series into bucket-boundary points.
///
/// Uses the default configuration: millisecond timestamps, UTC calendar, and
/// both ordering and finiteness checks enabled. See [`aggregate_with_config`]
/// for the full rules.
///
/// # Errors
/// Same as [`aggregate_with_config`].
///
/// ```
/// use tidemark_core::{aggregate, AggregationPolicy, BucketSize, TimePoint};
/// const DAY: i64 = 86_400_000;
/// // 2024-01-01 (Mon) .. 2024-01-07 (Sun), one unit per day
/// let mon = 1_704_067_200_000;
/// let week: Vec<TimePoint> = (0..7).map(|i| TimePoint::new(mon + i * DAY, 1.0)).collect();
/// let out = aggregate(&week, BucketSize::Week, AggregationPolicy::Sum).unwrap();
/// assert_eq!(out, vec![TimePoint::new(mon + 6 * DAY, 7.0)]);
/// ```
pub fn aggregate(
    data: &[TimePoint],
    bucket_size: BucketSize,
    policy: AggregationPolicy,
) -> Result<Vec<TimePoint>, TidemarkError> {
    aggregate_with_config(data, &BucketerConfig::new(bucket_size, policy))
}

/// Collapse an ascending series into bucket-boundary points.
///
/// - A point is a boundary when it closes its bucket: every point for `Day`,
///   a Sunday for `Week`, the last calendar day of its month for `Month`.
///   Week and month are evaluated in `cfg.zone`.
/// - Each value is added to a running accumulator, boundary or not.
/// - A boundary emits a point at its own timestamp carrying the accumulator
///   (`Sum`) or its own value (`Last`), then the accumulator resets.
/// - For `Week`/`Month`, if the chronologically latest point is newer than the
///   last boundary (or no boundary was seen), one trailing point is appended at
///   the latest timestamp. It carries the un-flushed accumulator (`Sum`) or
///   the latest point's own value (`Last`). `Day` never appends.
///
/// Output preserves input order. Empty input yields empty output.
///
/// # Errors
/// - `Unsorted` if `cfg.validate_order` and a timestamp decreases.
/// - `NonFinite` if `cfg.reject_non_finite` and a value is NaN or infinite.
/// - `TimestampOutOfRange` for week/month buckets when a timestamp has no
///   calendar date.
/// - `InvalidArg` if the configured zone is invalid.
pub fn aggregate_with_config(
    data: &[TimePoint],
    cfg: &BucketerConfig,
) -> Result<Vec<TimePoint>, TidemarkError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    cfg.validate()?;
    if cfg.validate_order {
        ensure_sorted(data)?;
    }
    if cfg.reject_non_finite {
        ensure_finite(data)?;
    }

    let size = cfg.bucket_size;
    let mut out: Vec<TimePoint> = Vec::new();
    let mut summarized = 0.0_f64;
    let mut latest: Option<TimePoint> = None;
    let mut last_valid: Option<TimePoint> = None;

    for &point in data {
        summarized += point.value;

        if is_boundary(point.timestamp, size, cfg.time_unit, &cfg.zone)? {
            let value = match cfg.policy {
                AggregationPolicy::Sum => summarized,
                AggregationPolicy::Last => point.value,
            };
            summarized = 0.0;
            out.push(point.with_value(value));
            last_valid = Some(point);
        }

        if size != BucketSize::Day && latest.is_none_or(|l| point.timestamp > l.timestamp) {
            latest = Some(point);
        }
    }

    if let Some(tail) = latest
        && last_valid.is_none_or(|v| tail.timestamp > v.timestamp)
    {
        let value = match cfg.policy {
            AggregationPolicy::Sum => summarized,
            AggregationPolicy::Last => tail.value,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            bucket_size = %size,
            ts = tail.timestamp,
            value,
            "appending trailing partial bucket"
        );
        out.push(tail.with_value(value));
    }

    Ok(out)
}
