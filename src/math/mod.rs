// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Integer math utilities.

pub mod add;
pub mod sum;

pub use add::{add, checked_add};
pub use sum::{checked_sum, sum};
