use crate::config::{self, Config, ConfigValue, CONFIG};

#[test]
fn test_constant_values() {
    assert_eq!(config::VERSION, 1);
    assert!(config::LOG_ENABLED);
    assert_eq!(config::LOG_LEVEL, 3);
    assert_eq!(config::MAX_BATCH, 64);
    assert_eq!(config::MIN_BATCH, 4);
    assert!(config::FAST_PATH);
    assert!(!config::SLOW_PATH);
    assert!(config::USE_SIMD);
    assert_eq!(config::TIMEOUT_MS, 200);
    assert_eq!(config::RETRY_COUNT, 3);
}

#[test]
fn test_batch_bounds_ordered() {
    assert!(config::MAX_BATCH >= config::MIN_BATCH);
    assert!(CONFIG.max_batch >= CONFIG.min_batch);
}

#[test]
fn test_record_mirrors_constants() {
    assert_eq!(CONFIG, Config::CURRENT);
    assert_eq!(Config::default(), Config::CURRENT);
    assert_eq!(CONFIG.version, config::VERSION);
    assert_eq!(CONFIG.timeout_ms, config::TIMEOUT_MS);
    assert_eq!(CONFIG.retry_count, config::RETRY_COUNT);
}

#[test]
fn test_entries_named_in_order() {
    let entries = CONFIG.entries();
    assert_eq!(entries[0], ("VERSION", ConfigValue::Int(1)));
    assert_eq!(entries[1], ("LOG_ENABLED", ConfigValue::Bool(true)));
    assert_eq!(entries[3], ("MAX_BATCH", ConfigValue::Int(64)));
    assert_eq!(entries[6], ("SLOW_PATH", ConfigValue::Bool(false)));
    assert_eq!(entries[9], ("RETRY_COUNT", ConfigValue::Int(3)));

    // Display is what front ends print
    assert_eq!(format!("{}", entries[8].1), "200");
    assert_eq!(format!("{}", entries[7].1), "true");
}
