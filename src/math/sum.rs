//! Summation over a borrowed slice.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{MathError, MathResult};

/// Sums every element. An empty slice sums to 0.
///
/// Accumulates with wrapping addition; the input is only borrowed.
pub fn sum(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

/// Sums every element, stopping at the first overflow of the running total.
pub fn checked_sum(values: &[i32]) -> MathResult<i32> {
    let mut out: i32 = 0;
    for &v in values {
        out = out.checked_add(v).ok_or(MathError::Overflow)?;
    }
    Ok(out)
}
