use tidemark::{AggregationPolicy, BucketSize, Bucketer, TidemarkError, TimePoint};

use crate::helpers::{MockSource, approx, d, p, sum};

#[test]
fn weekly_revenue_closes_on_sundays_and_trails_to_now() {
    let src = MockSource::new();
    let revenue = src.series("revenue").unwrap();
    let bars = Bucketer::builder()
        .bucket_size(BucketSize::Week)
        .build()
        .unwrap()
        .aggregate(&revenue)
        .unwrap();

    // Sundays 2024-01-07 .. 2024-03-17 plus the open week ending 2024-03-20.
    assert_eq!(bars.len(), 12);
    assert_eq!(bars[0].timestamp, d("2024-01-07"));
    assert_eq!(bars[10].timestamp, d("2024-03-17"));
    assert_eq!(bars[11].timestamp, src.now());
    assert!(approx(sum(&bars), sum(&revenue)));
}

#[test]
fn monthly_runway_keeps_period_end_levels() {
    let src = MockSource::new();
    let runway = src.series("runway").unwrap();
    let bars = Bucketer::builder()
        .bucket_size(BucketSize::Month)
        .policy(AggregationPolicy::Last)
        .build()
        .unwrap()
        .aggregate(&runway)
        .unwrap();

    let level_at = |ts: i64| runway.iter().find(|pt| pt.timestamp == ts).unwrap().value;
    let expected: Vec<TimePoint> = ["2024-01-31", "2024-02-29", "2024-03-20"]
        .into_iter()
        .map(|date| TimePoint::new(d(date), level_at(d(date))))
        .collect();
    assert_eq!(bars, expected);
}

#[test]
fn sparse_series_buckets_on_present_sundays_only() {
    // OEV captures land every third day from Sunday 2023-12-31.
    let oev = MockSource::new().series("oev").unwrap();
    let bars = Bucketer::builder()
        .bucket_size(BucketSize::Week)
        .build()
        .unwrap()
        .aggregate(&oev)
        .unwrap();
    // Every third day hits a Sunday once every 21 days.
    assert_eq!(bars[0].timestamp, d("2023-12-31"));
    assert_eq!(bars[1].timestamp, d("2024-01-21"));
    assert!(approx(sum(&bars), sum(&oev)));
}

#[test]
fn invalid_fixtures_surface_typed_errors() {
    let src = MockSource::new();
    let b = Bucketer::builder().build().unwrap();
    assert!(matches!(
        b.aggregate(&src.series("unsorted").unwrap()),
        Err(TidemarkError::Unsorted { index: 2, .. })
    ));
    assert!(matches!(
        b.aggregate(&src.series("nan").unwrap()),
        Err(TidemarkError::NonFinite { index: 1, .. })
    ));
}

#[test]
fn non_finite_passes_when_check_disabled() {
    let b = Bucketer::builder().reject_non_finite(false).build().unwrap();
    let out = b
        .aggregate(&[p("2024-01-01", 1.0), p("2024-01-02", f64::INFINITY)])
        .unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[1].value.is_infinite());
}
