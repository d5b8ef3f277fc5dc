// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! modpath-core: build-time configuration constants and the integer math
//! helpers that read them.

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod math;

pub use config::{Config, CONFIG};
pub use error::{MathError, MathResult};
pub use math::{add, checked_add, checked_sum, sum};

#[cfg(test)]
pub mod tests;
