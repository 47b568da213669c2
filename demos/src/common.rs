use std::path::Path;

use chrono::DateTime;
use tidemark::{BucketerConfig, TimePoint};
use tidemark_mock::MockSource;

/// Environment variable naming a JSON file with a `[{timestamp, value}]` series.
pub const SERIES_ENV: &str = "TIDEMARK_DEMO_SERIES";
/// Environment variable naming a JSON file with a `BucketerConfig`.
pub const CONFIG_ENV: &str = "TIDEMARK_DEMO_CONFIG";

/// Install a human-friendly tracing subscriber with env-based filtering.
///
/// Suggested: `RUST_LOG=info,tidemark=trace,tidemark_core=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Return the series a demo should chart.
///
/// Reads the file named by `TIDEMARK_DEMO_SERIES` when set, otherwise the mock
/// fixture called `fixture`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the fixture
/// does not exist.
pub fn load_series(fixture: &str) -> Result<Vec<TimePoint>, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var(SERIES_ENV) {
        println!("--- (Using series from {path}) ---");
        return read_json(Path::new(&path));
    }
    MockSource::new()
        .series(fixture)
        .ok_or_else(|| format!("unknown fixture '{fixture}'").into())
}

/// Return the bucketer configuration for a demo, falling back to `default`.
///
/// # Errors
/// Returns an error if `TIDEMARK_DEMO_CONFIG` names an unreadable or invalid file.
pub fn load_config(default: BucketerConfig) -> Result<BucketerConfig, Box<dyn std::error::Error>> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => read_json(Path::new(&path)),
        Err(_) => Ok(default),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Render a millisecond timestamp as an ISO date for printing.
#[must_use]
pub fn fmt_day(ts_ms: i64) -> String {
    DateTime::from_timestamp_millis(ts_ms)
        .map_or_else(|| ts_ms.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// Print bars as `date  value` rows.
pub fn print_bars(title: &str, bars: &[TimePoint]) {
    println!("{title}");
    for b in bars {
        println!("  {}  {:>14.2}", fmt_day(b.timestamp), b.value);
    }
}
