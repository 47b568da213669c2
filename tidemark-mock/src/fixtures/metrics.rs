use tidemark_core::TimePoint;

use super::daily;

pub const NAMES: &[&str] = &["revenue", "incentives", "oev", "runway"];

pub fn by_name(name: &str) -> Option<Vec<TimePoint>> {
    match name {
        // 2024-01-01 (Mon) .. 2024-03-20 (Wed)
        "revenue" => Some(daily("2024-01-01", 80, |i| 100.0 + ((i * 37) % 50) as f64)),
        "incentives" => Some(daily("2024-01-01", 80, |i| if i % 7 == 3 { 250.0 } else { 0.0 })),
        // Sparse OEV captures: every third day, starting on a Sunday.
        "oev" => Some(
            daily("2023-12-31", 81, |i| 3.0 + (i % 5) as f64 * 12.5)
                .into_iter()
                .step_by(3)
                .collect(),
        ),
        // Months of runway, decaying slowly.
        "runway" => Some(daily("2024-01-01", 80, |i| 36.0 - i as f64 * 0.05)),
        _ => None,
    }
}
