use std::collections::BTreeMap;

use tidemark_core::TimePoint;

use super::daily;

pub const ASSETS: &[&str] = &["ETH", "NATIVE", "USDC"];

pub fn by_asset(asset: &str) -> Option<Vec<TimePoint>> {
    match asset {
        "ETH" => Some(daily("2024-01-01", 80, |i| 2_400_000.0 + (i % 9) as f64 * 15_000.0)),
        "NATIVE" => Some(daily("2024-01-01", 80, |i| 9_000_000.0 - i as f64 * 12_500.0)),
        // Stablecoin reporting stopped two days earlier than the others.
        "USDC" => Some(daily("2024-01-01", 78, |_| 5_000_000.0)),
        _ => None,
    }
}

pub fn all() -> BTreeMap<String, Vec<TimePoint>> {
    ASSETS
        .iter()
        .filter_map(|a| by_asset(a).map(|s| ((*a).to_string(), s)))
        .collect()
}
