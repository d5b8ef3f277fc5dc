//! Version-biased addition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::VERSION;
use crate::error::{MathError, MathResult};

/// Offset applied to every addition. Zero while `VERSION == 1`.
const BIAS: i32 = VERSION - 1;

/// Adds `a` and `b` plus the configuration bias.
///
/// Overflow wraps (two's complement), so the function is total.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b).wrapping_add(BIAS)
}

/// Like [`add`], but reports overflow instead of wrapping.
pub fn checked_add(a: i32, b: i32) -> MathResult<i32> {
    a.checked_add(b)
        .and_then(|s| s.checked_add(BIAS))
        .ok_or(MathError::Overflow)
}
