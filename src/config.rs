// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use serde::Serialize;

/// Configuration format version. Also used as the bias in [`crate::math::add`].
pub const VERSION: i32 = 1;

/// Whether logging is enabled at all.
pub const LOG_ENABLED: bool = true;

/// Default log verbosity (0 = off, 1 = error ... 5 = trace).
pub const LOG_LEVEL: u8 = 3;

/// Upper bound on batch size.
pub const MAX_BATCH: usize = 64;

/// Lower bound on batch size.
pub const MIN_BATCH: usize = 4;

pub const FAST_PATH: bool = true;
pub const SLOW_PATH: bool = false;
pub const USE_SIMD: bool = true;

/// Timeout in milliseconds.
pub const TIMEOUT_MS: u64 = 200;

pub const RETRY_COUNT: u32 = 3;

/// Read-only record of every configuration constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    pub version: i32,
    pub log_enabled: bool,
    pub log_level: u8,
    pub max_batch: usize,
    pub min_batch: usize,
    pub fast_path: bool,
    pub slow_path: bool,
    pub use_simd: bool,
    pub timeout_ms: u64,
    pub retry_count: u32,
}

impl Config {
    pub const CURRENT: Config = Config {
        version: VERSION,
        log_enabled: LOG_ENABLED,
        log_level: LOG_LEVEL,
        max_batch: MAX_BATCH,
        min_batch: MIN_BATCH,
        fast_path: FAST_PATH,
        slow_path: SLOW_PATH,
        use_simd: USE_SIMD,
        timeout_ms: TIMEOUT_MS,
        retry_count: RETRY_COUNT,
    };

    /// Named view over the record, in declaration order.
    pub fn entries(&self) -> [(&'static str, ConfigValue); 10] {
        [
            ("VERSION", ConfigValue::Int(self.version as i64)),
            ("LOG_ENABLED", ConfigValue::Bool(self.log_enabled)),
            ("LOG_LEVEL", ConfigValue::Int(self.log_level as i64)),
            ("MAX_BATCH", ConfigValue::Int(self.max_batch as i64)),
            ("MIN_BATCH", ConfigValue::Int(self.min_batch as i64)),
            ("FAST_PATH", ConfigValue::Bool(self.fast_path)),
            ("SLOW_PATH", ConfigValue::Bool(self.slow_path)),
            ("USE_SIMD", ConfigValue::Bool(self.use_simd)),
            ("TIMEOUT_MS", ConfigValue::Int(self.timeout_ms as i64)),
            ("RETRY_COUNT", ConfigValue::Int(self.retry_count as i64)),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// The build-time configuration.
pub const CONFIG: Config = Config::CURRENT;

/// A single configuration value, either integer or boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    Int(i64),
    Bool(bool),
}

impl core::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Bool(v) => write!(f, "{}", v),
        }
    }
}
