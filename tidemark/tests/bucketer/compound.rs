use std::collections::BTreeMap;

use proptest::prelude::*;
use tidemark::{
    AggregationPolicy, BucketSize, Bucketer, CompoundSeries, TidemarkError, TimePoint,
    merge_series,
};

use crate::helpers::{MockSource, approx, d, sum};

fn monthly_last() -> Bucketer {
    Bucketer::builder()
        .bucket_size(BucketSize::Month)
        .policy(AggregationPolicy::Last)
        .build()
        .unwrap()
}

#[test]
fn treasury_stack_keeps_each_asset_and_a_total() {
    let src = MockSource::new();
    let out = monthly_last().aggregate_compound(&src.treasury_by_asset()).unwrap();

    assert_eq!(out.series.len(), 3);
    // USDC stops on 2024-03-18, so its open month trails there.
    let usdc = out.get("USDC").unwrap();
    assert_eq!(usdc.last().unwrap().timestamp, d("2024-03-18"));
    assert_eq!(out.get("ETH").unwrap().last().unwrap().timestamp, d("2024-03-20"));

    // Month ends are shared by all assets; the open month splits in two.
    let stamps: Vec<i64> = out.total.iter().map(|p| p.timestamp).collect();
    assert_eq!(
        stamps,
        vec![d("2024-01-31"), d("2024-02-29"), d("2024-03-18"), d("2024-03-20")]
    );
    let jan_total: f64 = out
        .series
        .values()
        .map(|s| s.iter().find(|p| p.timestamp == d("2024-01-31")).unwrap().value)
        .sum();
    assert!(approx(out.total[0].value, jan_total));
}

#[test]
fn failing_key_is_tagged() {
    let src = MockSource::new();
    let mut inputs = src.treasury_by_asset();
    inputs.insert("broken".to_string(), src.series("unsorted").unwrap());

    let err = monthly_last().aggregate_compound(&inputs).unwrap_err();
    match err {
        TidemarkError::Series { ref key, ref source } => {
            assert_eq!(key, "broken");
            assert!(matches!(**source, TidemarkError::Unsorted { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_input_is_empty_compound() {
    let out = monthly_last().aggregate_compound(&BTreeMap::new()).unwrap();
    assert!(out.is_empty());
    assert_eq!(out, CompoundSeries::default());
}

#[test]
fn compound_serializes_as_plain_json() {
    let mut inputs = BTreeMap::new();
    inputs.insert("fees".to_string(), vec![TimePoint::new(d("2024-01-31"), 2.0)]);
    let out = monthly_last().aggregate_compound(&inputs).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["series"]["fees"][0]["value"], serde_json::json!(2.0));
    assert_eq!(json["total"][0]["timestamp"], serde_json::json!(d("2024-01-31")));
}

fn arb_keyed() -> impl Strategy<Value = BTreeMap<String, Vec<TimePoint>>> {
    let series = (
        1_700_000_000_000i64..1_800_000_000_000i64,
        proptest::collection::vec((1i64..72, 0i64..10_000i64), 0..60),
    )
        .prop_map(|(start, steps)| {
            let mut ts = start;
            steps
                .into_iter()
                .map(|(h, cents)| {
                    ts += h * 3_600_000;
                    TimePoint::new(ts, cents as f64 / 100.0)
                })
                .collect::<Vec<_>>()
        });
    proptest::collection::btree_map("[a-z]{1,6}", series, 0..5)
}

proptest! {
    #[test]
    fn sum_compound_total_conserves_inputs(inputs in arb_keyed()) {
        let b = Bucketer::builder().bucket_size(BucketSize::Week).build().unwrap();
        let out = b.aggregate_compound(&inputs).unwrap();
        let input_total: f64 = inputs.values().map(|s| sum(s)).sum();
        prop_assert!(approx(sum(&out.total), input_total));
        let remerged = merge_series(out.series.values().map(Vec::as_slice));
        prop_assert_eq!(remerged, out.total);
    }
}
