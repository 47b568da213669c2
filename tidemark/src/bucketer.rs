use tidemark_core::{
    AggregationPolicy, BucketSize, BucketerConfig, CalendarZone, ChartRange, TidemarkError,
    TimePoint, TimeUnit,
};

/// Configured aggregator that turns raw series into chart bars.
///
/// A `Bucketer` is immutable after [`BucketerBuilder::build`] and can be shared
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucketer {
    pub(crate) cfg: BucketerConfig,
}

/// Builder for constructing a [`Bucketer`] with custom configuration.
#[derive(Debug, Clone)]
pub struct BucketerBuilder {
    cfg: BucketerConfig,
}

impl Default for BucketerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketerBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Defaults are daily buckets, `Sum` policy, millisecond timestamps and
    ///   the UTC calendar.
    /// - Ordering and finiteness checks are on; disable them only for input
    ///   already validated upstream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: BucketerConfig::default(),
        }
    }

    /// Select the bar cadence.
    #[must_use]
    pub const fn bucket_size(mut self, size: BucketSize) -> Self {
        self.cfg.bucket_size = size;
        self
    }

    /// Select how a boundary point's value is computed.
    ///
    /// Behavior and trade-offs:
    /// - `Sum` suits flow series (revenue, incentives); totals are conserved.
    /// - `Last` suits level series (treasury balance, runway); the bar shows
    ///   the value at period end and intermediate values are discarded.
    #[must_use]
    pub const fn policy(mut self, policy: AggregationPolicy) -> Self {
        self.cfg.policy = policy;
        self
    }

    /// Declare the unit of input timestamps.
    #[must_use]
    pub const fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.cfg.time_unit = unit;
        self
    }

    /// Evaluate week and month boundaries in an arbitrary calendar zone.
    #[must_use]
    pub const fn zone(mut self, zone: CalendarZone) -> Self {
        self.cfg.zone = zone;
        self
    }

    /// Evaluate boundaries at a constant offset east of UTC.
    ///
    /// The offset is checked in [`build`](Self::build).
    #[must_use]
    pub const fn utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.cfg.zone = CalendarZone::FixedOffset { seconds };
        self
    }

    /// Evaluate boundaries in an IANA timezone, following its DST rules.
    #[must_use]
    pub const fn timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.cfg.zone = CalendarZone::Named(tz);
        self
    }

    /// Toggle the ascending-order check.
    ///
    /// When off, unsorted input produces unspecified buckets instead of an
    /// `Unsorted` error.
    #[must_use]
    pub const fn validate_order(mut self, yes: bool) -> Self {
        self.cfg.validate_order = yes;
        self
    }

    /// Toggle rejection of NaN and infinite values.
    #[must_use]
    pub const fn reject_non_finite(mut self, yes: bool) -> Self {
        self.cfg.reject_non_finite = yes;
        self
    }

    /// Build the `Bucketer`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured fixed offset is a day or more.
    pub fn build(self) -> Result<Bucketer, TidemarkError> {
        Bucketer::from_config(self.cfg)
    }
}

impl Bucketer {
    /// Start building a new `Bucketer`.
    #[must_use]
    pub fn builder() -> BucketerBuilder {
        BucketerBuilder::new()
    }

    /// Build directly from a deserialized configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configuration is out of range.
    pub fn from_config(cfg: BucketerConfig) -> Result<Self, TidemarkError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BucketerConfig {
        &self.cfg
    }

    /// Aggregate one ascending series into bucket-boundary points.
    ///
    /// # Errors
    /// See [`tidemark_core::aggregate_with_config`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidemark::aggregate",
            skip(self, data),
            fields(
                points = data.len(),
                bucket_size = %self.cfg.bucket_size,
                policy = %self.cfg.policy,
            ),
            err,
        )
    )]
    pub fn aggregate(&self, data: &[TimePoint]) -> Result<Vec<TimePoint>, TidemarkError> {
        tidemark_core::aggregate_with_config(data, &self.cfg)
    }

    /// Trim a series to the trailing `range` ending at `now`, then aggregate it.
    ///
    /// `now` is supplied by the caller in the configured time unit; the
    /// bucketer never reads the clock.
    ///
    /// # Errors
    /// See [`tidemark_core::aggregate_with_config`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidemark::aggregate_range",
            skip(self, data),
            fields(points = data.len(), range = %range),
            err,
        )
    )]
    pub fn aggregate_range(
        &self,
        data: &[TimePoint],
        range: ChartRange,
        now: i64,
    ) -> Result<Vec<TimePoint>, TidemarkError> {
        let window = tidemark_core::filter_for_range(data, range, now, self.cfg.time_unit);
        tidemark_core::aggregate_with_config(&window, &self.cfg)
    }
}
