use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tidemark_core::{TidemarkError, TimePoint};

use crate::Bucketer;

/// Several keyed series aggregated with one bucketer, plus their stacked total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundSeries {
    /// Aggregated output per key, in key order.
    pub series: BTreeMap<String, Vec<TimePoint>>,
    /// Per-key outputs summed at equal timestamps.
    pub total: Vec<TimePoint>,
}

impl CompoundSeries {
    /// Aggregated output for one key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[TimePoint]> {
        self.series.get(key).map(Vec::as_slice)
    }

    /// True when no key produced any point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

impl Bucketer {
    /// Aggregate several series that share a chart, such as the components of
    /// a stacked treasury bar.
    ///
    /// Behavior and trade-offs:
    /// - Each key is bucketed independently, so a key's trailing point sits at
    ///   that key's own latest timestamp. Series with different end dates
    ///   therefore stack into separate trailing bars in `total`.
    /// - Processing stops at the first failing key.
    ///
    /// # Errors
    /// Returns `TidemarkError::Series` tagged with the failing key.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidemark::aggregate_compound",
            skip(self, inputs),
            fields(keys = inputs.len(), bucket_size = %self.cfg.bucket_size),
            err,
        )
    )]
    pub fn aggregate_compound(
        &self,
        inputs: &BTreeMap<String, Vec<TimePoint>>,
    ) -> Result<CompoundSeries, TidemarkError> {
        let mut series: BTreeMap<String, Vec<TimePoint>> = BTreeMap::new();
        for (key, points) in inputs {
            let out = self.aggregate(points).map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::debug!(key = %key, error = %e, "compound key failed");
                TidemarkError::series(key.clone(), e)
            })?;
            series.insert(key.clone(), out);
        }
        let total = tidemark_core::merge_series(series.values().map(Vec::as_slice));
        Ok(CompoundSeries { series, total })
    }
}
