use tidemark::{AggregationPolicy, BucketSize, Bucketer};
use tidemark_demos::common::print_bars;
use tidemark_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let treasury = MockSource::new().treasury_by_asset();

    // Balances are levels, so each bar keeps the period-end value.
    let bucketer = Bucketer::builder()
        .bucket_size(BucketSize::Month)
        .policy(AggregationPolicy::Last)
        .timezone(chrono_tz::UTC)
        .build()?;
    let stacked = bucketer.aggregate_compound(&treasury)?;

    for (asset, bars) in &stacked.series {
        print_bars(&format!("Treasury: {asset}"), bars);
    }
    print_bars("Treasury: total", &stacked.total);
    Ok(())
}
