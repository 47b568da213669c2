use tidemark::{AggregationPolicy, BucketSize, Bucketer, BucketerConfig, total};
use tidemark_demos::common::{load_config, load_series, print_bars};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let revenue = load_series("revenue")?;
    let cfg = load_config(BucketerConfig::new(BucketSize::Month, AggregationPolicy::Sum))?;
    let bucketer = Bucketer::from_config(cfg)?;

    let bars = bucketer.aggregate(&revenue)?;
    print_bars(
        &format!(
            "Revenue by {} ({})",
            bucketer.config().bucket_size,
            bucketer.config().policy
        ),
        &bars,
    );
    println!("points in: {}, bars out: {}", revenue.len(), bars.len());
    println!("total in: {:.2}, total out: {:.2}", total(&revenue), total(&bars));
    Ok(())
}
