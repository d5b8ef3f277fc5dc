use std::vec::Vec;

use proptest::prelude::*;

use crate::error::MathError;
use crate::math::{add, checked_add, checked_sum, sum};

#[test]
fn test_add() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-10, 10), 0);
    assert_eq!(add(0, 0), 0);
}

#[test]
fn test_add_overflow_wraps() {
    assert_eq!(add(i32::MAX, 1), i32::MIN);
    assert_eq!(checked_add(i32::MAX, 1), Err(MathError::Overflow));
    assert_eq!(checked_add(i32::MIN, -1), Err(MathError::Overflow));
    assert_eq!(checked_add(40, 2), Ok(42));
}

#[test]
fn test_sum() {
    assert_eq!(sum(&[]), 0);
    assert_eq!(sum(&[7]), 7);
    assert_eq!(sum(&[1, 2, 3, 4]), 10);
    assert_eq!(sum(&[-5, 5, -5]), -5);
}

#[test]
fn test_sum_does_not_mutate_input() {
    let values = vec![3, 1, 4, 1, 5];
    let before = values.clone();
    let _ = sum(&values);
    assert_eq!(values, before);
}

#[test]
fn test_checked_sum() {
    assert_eq!(checked_sum(&[]), Ok(0));
    assert_eq!(checked_sum(&[1, 2, 3, 4]), Ok(10));
    assert_eq!(checked_sum(&[i32::MAX, 1]), Err(MathError::Overflow));
    // Overflow in the running total is reported even if a later term would undo it
    assert_eq!(checked_sum(&[i32::MAX, 1, -1]), Err(MathError::Overflow));
    assert_eq!(sum(&[i32::MAX, 1, -1]), i32::MAX);
}

proptest! {
    #[test]
    fn add_matches_plain_addition(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
        prop_assert_eq!(add(a, b), a + b);
        prop_assert_eq!(checked_add(a, b), Ok(a + b));
    }

    #[test]
    fn sum_of_single_is_identity(v in any::<i32>()) {
        prop_assert_eq!(sum(&[v]), v);
    }

    #[test]
    fn sum_splits_over_concatenation(
        s1 in prop::collection::vec(any::<i32>(), 0..32),
        s2 in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let joined: Vec<i32> = s1.iter().chain(s2.iter()).copied().collect();
        prop_assert_eq!(sum(&joined), sum(&s1).wrapping_add(sum(&s2)));
    }
}
