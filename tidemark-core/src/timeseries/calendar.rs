//! Calendar predicates behind the week and month bucket boundaries.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeZone, Utc, Weekday};

use crate::{BucketSize, CalendarZone, TidemarkError, TimeUnit};

fn to_utc(timestamp: i64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Seconds => DateTime::from_timestamp(timestamp, 0),
        TimeUnit::Millis => DateTime::from_timestamp_millis(timestamp),
    }
}

/// Calendar date of `timestamp` as observed in `zone`.
///
/// # Errors
/// - `TimestampOutOfRange` if the instant is outside chrono's supported range.
/// - `InvalidArg` if `zone` is a fixed offset of a day or more.
pub fn local_date(
    timestamp: i64,
    unit: TimeUnit,
    zone: &CalendarZone,
) -> Result<NaiveDate, TidemarkError> {
    let out_of_range = || TidemarkError::TimestampOutOfRange { timestamp };
    let utc = to_utc(timestamp, unit).ok_or_else(out_of_range)?.naive_utc();
    let offset = match *zone {
        CalendarZone::Utc => return Ok(utc.date()),
        CalendarZone::FixedOffset { seconds } => FixedOffset::east_opt(seconds).ok_or_else(|| {
            TidemarkError::invalid_arg(format!("utc offset out of range: {seconds}s"))
        })?,
        CalendarZone::Named(tz) => tz.offset_from_utc_datetime(&utc).fix(),
    };
    // Shifting an instant at the edge of chrono's range can leave it.
    utc.checked_add_offset(offset)
        .map(|local| local.date())
        .ok_or_else(out_of_range)
}

/// Last calendar day of the month containing `date`.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        // December of chrono's maximum year has no successor month.
        .unwrap_or(NaiveDate::MAX)
}

/// True if `date` closes a bucket of size `size`.
#[must_use]
pub fn closes_bucket(date: NaiveDate, size: BucketSize) -> bool {
    match size {
        BucketSize::Day => true,
        BucketSize::Week => date.weekday() == Weekday::Sun,
        BucketSize::Month => date == last_day_of_month(date),
    }
}

/// True if the point at `timestamp` is a bucket boundary.
///
/// Day buckets never consult the calendar, so they cannot fail.
///
/// # Errors
/// Propagates the errors of [`local_date`] for week and month buckets.
pub fn is_boundary(
    timestamp: i64,
    size: BucketSize,
    unit: TimeUnit,
    zone: &CalendarZone,
) -> Result<bool, TidemarkError> {
    if size == BucketSize::Day {
        return Ok(true);
    }
    let date = local_date(timestamp, unit, zone)?;
    Ok(closes_bucket(date, size))
}
