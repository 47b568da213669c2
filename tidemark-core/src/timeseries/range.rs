use crate::{ChartRange, TimePoint, TimeUnit};

/// Keep the points inside the trailing `range` window ending at `now`.
///
/// A point is kept when `timestamp >= now - days(range)`; the lower edge is
/// inclusive and nothing is cut above `now`. [`ChartRange::All`] keeps every
/// point. Input order is preserved. `now` is in the same unit as the series.
///
/// ```
/// use tidemark_core::{filter_for_range, ChartRange, TimePoint, TimeUnit};
/// const DAY: i64 = 86_400;
/// let now = 100 * DAY;
/// let pts = vec![TimePoint::new(now - 8 * DAY, 1.0), TimePoint::new(now - 7 * DAY, 2.0)];
/// let kept = filter_for_range(&pts, ChartRange::D7, now, TimeUnit::Seconds);
/// assert_eq!(kept, vec![TimePoint::new(now - 7 * DAY, 2.0)]);
/// ```
#[must_use]
pub fn filter_for_range(
    data: &[TimePoint],
    range: ChartRange,
    now: i64,
    unit: TimeUnit,
) -> Vec<TimePoint> {
    let Some(days) = range.days() else {
        return data.to_vec();
    };
    let cutoff = now.saturating_sub(days.saturating_mul(unit.ticks_per_day()));
    data.iter()
        .copied()
        .filter(|p| p.timestamp >= cutoff)
        .collect()
}
