use std::collections::BTreeMap;

use crate::TimePoint;

/// Stack several series into one by summing values at equal timestamps.
///
/// - The output holds the union of all timestamps, ascending.
/// - A timestamp present in only some series contributes just those values.
/// - Duplicate timestamps inside one series are summed as well.
///
/// Values are not validated; non-finite inputs propagate into the sum.
pub fn merge_series<'a, I>(series: I) -> Vec<TimePoint>
where
    I: IntoIterator<Item = &'a [TimePoint]>,
{
    let mut stacked: BTreeMap<i64, f64> = BTreeMap::new();
    for points in series {
        for p in points {
            *stacked.entry(p.timestamp).or_insert(0.0) += p.value;
        }
    }
    stacked
        .into_iter()
        .map(|(timestamp, value)| TimePoint { timestamp, value })
        .collect()
}
