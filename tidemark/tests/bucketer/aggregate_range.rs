use tidemark::{BucketSize, Bucketer, ChartRange, TimePoint, TimeUnit};

use crate::helpers::{DAY_MS, MockSource, d};

#[test]
fn thirty_day_window_is_inclusive() {
    let src = MockSource::new();
    let revenue = src.series("revenue").unwrap();
    let b = Bucketer::builder().build().unwrap();
    let bars = b.aggregate_range(&revenue, ChartRange::D30, src.now()).unwrap();
    // 2024-02-19 .. 2024-03-20 inclusive
    assert_eq!(bars.len(), 31);
    assert_eq!(bars[0].timestamp, d("2024-02-19"));
}

#[test]
fn all_range_equals_plain_aggregate() {
    let src = MockSource::new();
    let revenue = src.series("revenue").unwrap();
    let b = Bucketer::builder()
        .bucket_size(ChartRange::All.default_bucket_size())
        .build()
        .unwrap();
    assert_eq!(
        b.aggregate_range(&revenue, ChartRange::All, src.now()).unwrap(),
        b.aggregate(&revenue).unwrap()
    );
}

#[test]
fn window_uses_configured_unit() {
    let secs: Vec<TimePoint> = MockSource::new()
        .series("revenue")
        .unwrap()
        .into_iter()
        .map(|pt| TimePoint::new(pt.timestamp / 1_000, pt.value))
        .collect();
    let now = secs.last().unwrap().timestamp;
    let b = Bucketer::builder()
        .bucket_size(BucketSize::Day)
        .time_unit(TimeUnit::Seconds)
        .build()
        .unwrap();
    let bars = b.aggregate_range(&secs, ChartRange::D7, now).unwrap();
    assert_eq!(bars.len(), 8);
    assert_eq!(bars[0].timestamp, now - 7 * DAY_MS / 1_000);
}
