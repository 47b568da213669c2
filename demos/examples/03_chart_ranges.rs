use tidemark::{AggregationPolicy, Bucketer, ChartRange};
use tidemark_demos::common::{load_series, print_bars};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let incentives = load_series("incentives")?;
    let now = incentives.last().map_or(0, |p| p.timestamp);

    for range in [ChartRange::D7, ChartRange::D30, ChartRange::D90, ChartRange::Y1] {
        let bucketer = Bucketer::builder()
            .bucket_size(range.default_bucket_size())
            .policy(AggregationPolicy::Sum)
            .build()?;
        let bars = bucketer.aggregate_range(&incentives, range, now)?;
        print_bars(
            &format!("Incentives {range} by {}", range.default_bucket_size()),
            &bars,
        );
    }
    Ok(())
}
