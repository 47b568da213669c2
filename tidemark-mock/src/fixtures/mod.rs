pub mod broken;
pub mod metrics;
pub mod treasury;

use chrono::{Days, NaiveDate};
use tidemark_core::TimePoint;

/// Epoch milliseconds of midnight UTC for an ISO date literal.
pub fn midnight_ms(date: &str) -> i64 {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

/// One point per day from `start`, with the value computed from the day index.
pub fn daily(start: &str, days: u64, value_of: impl Fn(u64) -> f64) -> Vec<TimePoint> {
    let first = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..days)
        .map(|i| {
            let date = first.checked_add_days(Days::new(i)).unwrap();
            let ts = date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis();
            TimePoint::new(ts, value_of(i))
        })
        .collect()
}
