use tidemark::{BucketSize, Bucketer, ChartRange};
use tidemark_demos::common::{init_tracing, load_series};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tidemark=trace,tidemark_core=debug
    init_tracing();

    let revenue = load_series("revenue")?;
    let now = revenue.last().map_or(0, |p| p.timestamp);

    let bucketer = Bucketer::builder().bucket_size(BucketSize::Week).build()?;
    let _ = bucketer.aggregate(&revenue)?;
    let _ = bucketer.aggregate_range(&revenue, ChartRange::D90, now)?;

    // Failures are recorded on the span before being returned.
    let unsorted = tidemark_mock::MockSource::new()
        .series("unsorted")
        .unwrap_or_default();
    if let Err(e) = bucketer.aggregate(&unsorted) {
        tracing::warn!(error = %e, "rejected unsorted series");
    }

    Ok(())
}
