//! Shared checks for input series.

use crate::{TidemarkError, TimePoint};

/// Ensure timestamps never decrease. Equal neighbours are accepted.
///
/// # Errors
/// Returns `Err(TidemarkError::Unsorted)` pointing at the first point that is
/// older than its predecessor.
pub fn ensure_sorted(points: &[TimePoint]) -> Result<(), TidemarkError> {
    for (i, pair) in points.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(TidemarkError::Unsorted {
                index: i + 1,
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
    }
    Ok(())
}

/// Ensure every value is finite.
///
/// # Errors
/// Returns `Err(TidemarkError::NonFinite)` for the first NaN or infinite value.
pub fn ensure_finite(points: &[TimePoint]) -> Result<(), TidemarkError> {
    match points.iter().position(|p| !p.value.is_finite()) {
        Some(index) => Err(TidemarkError::NonFinite {
            index,
            timestamp: points[index].timestamp,
        }),
        None => Ok(()),
    }
}

/// Sum of all values in the series.
#[must_use]
pub fn total(points: &[TimePoint]) -> f64 {
    points.iter().map(|p| p.value).sum()
}
