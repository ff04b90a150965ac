//! The blink rule applied to a single stone.
//!
//! A stone is identified only by its value. One blink replaces it with one or
//! two stones:
//! - `0` becomes `1`
//! - a value with an even number of decimal digits splits into its left and
//!   right digit halves (the right half loses any leading zeros: `1000` -> `10`, `0`)
//! - anything else is multiplied by 2024

use crate::error::LutError;

/// Multiplier applied to stones with an odd number of digits.
pub const MULTIPLIER: u64 = 2024;

/// The stones produced by one blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successors {
    One(u64),
    Two(u64, u64),
}

impl Successors {
    /// Number of stones produced (1 or 2).
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Always false; a blink never removes a stone.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The produced values in order.
    pub fn to_vec(&self) -> Vec<u64> {
        match *self {
            Self::One(a) => vec![a],
            Self::Two(a, b) => vec![a, b],
        }
    }
}

/// Number of decimal digits in `value` (`0` has one digit).
pub fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Apply one blink to a stone of the given value.
///
/// Returns [`LutError::Overflow`] when `value * 2024` does not fit in a u64.
/// `depth` is only used to label that error.
pub fn transform(value: u64, depth: usize) -> Result<Successors, LutError> {
    if value == 0 {
        return Ok(Successors::One(1));
    }

    let digits = digit_count(value);
    if digits % 2 == 0 {
        // Numeric split; equivalent to cutting the decimal string in half and
        // parsing each side.
        let divisor = 10u64.pow(digits / 2);
        return Ok(Successors::Two(value / divisor, value % divisor));
    }

    value
        .checked_mul(MULTIPLIER)
        .map(Successors::One)
        .ok_or(LutError::Overflow { value, depth })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split the way a string-based implementation would.
    fn split_via_string(value: u64) -> (u64, u64) {
        let s = value.to_string();
        let (a, b) = s.split_at(s.len() / 2);
        (a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_transform_zero() {
        assert_eq!(transform(0, 1).unwrap(), Successors::One(1));
    }

    #[test]
    fn test_transform_odd_digits_multiplies() {
        assert_eq!(transform(1, 1).unwrap(), Successors::One(2024));
        assert_eq!(transform(125, 1).unwrap(), Successors::One(253_000));
        assert_eq!(transform(99_999, 1).unwrap(), Successors::One(99_999 * 2024));
    }

    #[test]
    fn test_transform_even_digits_splits() {
        assert_eq!(transform(17, 1).unwrap(), Successors::Two(1, 7));
        assert_eq!(transform(253_000, 1).unwrap(), Successors::Two(253, 0));
        assert_eq!(transform(2024, 1).unwrap(), Successors::Two(20, 24));
    }

    #[test]
    fn test_transform_split_drops_leading_zeros() {
        assert_eq!(transform(1000, 1).unwrap(), Successors::Two(10, 0));
        assert_eq!(transform(1001, 1).unwrap(), Successors::Two(10, 1));
        assert_eq!(transform(100_007, 1).unwrap(), Successors::Two(100, 7));
    }

    #[test]
    fn test_transform_matches_string_split() {
        for value in [10u64, 99, 1000, 1234, 5005, 100_000, 987_654, 12_345_678, 10_000_000_000_000_000_000] {
            let (a, b) = split_via_string(value);
            assert_eq!(transform(value, 1).unwrap(), Successors::Two(a, b), "value {}", value);
        }
    }

    #[test]
    fn test_transform_overflow_returns_error() {
        let big = 100_000_000_000_000_000u64; // 18 digits would split, 19 digits multiply
        assert_eq!(digit_count(big * 10), 19);
        let result = transform(big * 10, 7);
        match result {
            Err(LutError::Overflow { value, depth }) => {
                assert_eq!(value, big * 10);
                assert_eq!(depth, 7);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_successors_len() {
        assert_eq!(Successors::One(5).len(), 1);
        assert_eq!(Successors::Two(1, 2).len(), 2);
        assert!(!Successors::One(5).is_empty());
        assert_eq!(Successors::Two(1, 2).to_vec(), vec![1, 2]);
    }
}
