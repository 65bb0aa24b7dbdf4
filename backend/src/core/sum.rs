//! Integer sum over an ordered buffer
//!
//! This is the function the interface generator in [`crate::ffi::generated`]
//! binds. It knows nothing about the interpreter: it takes a slice and
//! returns a number.

use thiserror::Error;

/// Errors from summing a buffer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SumError {
    #[error("sum overflowed a 64-bit integer at item {index}")]
    Overflow { index: usize },
}

/// Sum every item of `buffer`
///
/// An empty buffer sums to 0. Overflow is reported rather than wrapped.
///
/// # Example
/// ```
/// use pybridge_core_rs::core::list_sum;
///
/// assert_eq!(list_sum(&[5, 6, 7]), Ok(18));
/// assert_eq!(list_sum(&[]), Ok(0));
/// ```
pub fn list_sum(buffer: &[i64]) -> Result<i64, SumError> {
    buffer
        .iter()
        .enumerate()
        .try_fold(0i64, |total, (index, &item)| {
            total.checked_add(item).ok_or(SumError::Overflow { index })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_scenarios() {
        assert_eq!(list_sum(&[5, 6, 7]), Ok(18));
        assert_eq!(list_sum(&[1, 2, 3, 4, 5]), Ok(15));
        assert_eq!(list_sum(&[5, 6, 7, 8]), Ok(26));
    }

    #[test]
    fn test_empty_buffer_is_zero() {
        assert_eq!(list_sum(&[]), Ok(0));
    }

    #[test]
    fn test_negative_items() {
        assert_eq!(list_sum(&[-4, 10, -6]), Ok(0));
    }

    #[test]
    fn test_overflow_reports_offending_index() {
        assert_eq!(
            list_sum(&[1, i64::MAX, 3]),
            Err(SumError::Overflow { index: 1 })
        );
        assert_eq!(
            list_sum(&[i64::MIN, -1]),
            Err(SumError::Overflow { index: 1 })
        );
    }

    proptest! {
        #[test]
        fn prop_matches_wide_sum(items in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
            let expected: i128 = items.iter().map(|&x| i128::from(x)).sum();
            prop_assert_eq!(list_sum(&items).map(i128::from), Ok(expected));
        }
    }
}
