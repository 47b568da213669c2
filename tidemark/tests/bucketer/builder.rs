use tidemark::{
    AggregationPolicy, BucketSize, Bucketer, BucketerConfig, CalendarZone, TidemarkError, TimeUnit,
};

#[test]
fn defaults_match_config_default() {
    let b = Bucketer::builder().build().unwrap();
    assert_eq!(b.config(), &BucketerConfig::default());
}

#[test]
fn modifiers_are_applied_and_last_zone_wins() {
    let b = Bucketer::builder()
        .bucket_size(BucketSize::Month)
        .policy(AggregationPolicy::Last)
        .time_unit(TimeUnit::Seconds)
        .utc_offset_seconds(-18_000)
        .timezone(chrono_tz::Asia::Singapore)
        .validate_order(false)
        .reject_non_finite(false)
        .build()
        .unwrap();
    let cfg = b.config();
    assert_eq!(cfg.bucket_size, BucketSize::Month);
    assert_eq!(cfg.policy, AggregationPolicy::Last);
    assert_eq!(cfg.time_unit, TimeUnit::Seconds);
    assert_eq!(cfg.zone, CalendarZone::Named(chrono_tz::Asia::Singapore));
    assert!(!cfg.validate_order);
    assert!(!cfg.reject_non_finite);
}

#[test]
fn out_of_range_offset_fails_build() {
    let res = Bucketer::builder().utc_offset_seconds(86_400).build();
    assert!(matches!(res, Err(TidemarkError::InvalidArg(_))));
}

#[test]
fn from_json_config() {
    let cfg: BucketerConfig = serde_json::from_str(
        r#"{"bucket_size":"month","policy":"last","zone":{"named":"Europe/Rome"}}"#,
    )
    .unwrap();
    let b = Bucketer::from_config(cfg).unwrap();
    assert_eq!(b.config().zone, CalendarZone::Named(chrono_tz::Europe::Rome));
    assert_eq!(b.config().time_unit, TimeUnit::Millis);
}
