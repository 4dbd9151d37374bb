//! Small slice helpers shared by the indicator families.
//!
//! # Floating-Point Comparison
//!
//! Reference values are compared with a tolerance rather than bit equality:
//! accumulation order differs between otherwise identical formulas.
//!
//! ```
//! use fast_ti::utils::{approx_eq, EPSILON};
//!
//! assert!(approx_eq(0.1_f64 + 0.2, 0.3, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results built from long accumulations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Two NaNs compare equal, and two infinities of the same sign compare equal,
/// so degenerate indicator results can be asserted like any other value.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < tolerance
}

/// Sum of a slice, accumulated left to right.
#[inline]
#[must_use]
pub fn sum<T: SeriesElement>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// First differences `data[i] - data[i - 1]`; one element shorter than `data`.
#[must_use]
pub fn price_changes<T: SeriesElement>(data: &[T]) -> Vec<T> {
    data.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Splits the moves of a series into strictly positive gains and strictly
/// positive losses (as magnitudes). Unchanged steps go to neither list.
#[must_use]
pub fn gains_and_losses<T: SeriesElement>(data: &[T]) -> (Vec<T>, Vec<T>) {
    let mut gains = Vec::new();
    let mut losses = Vec::new();
    for pair in data.windows(2) {
        let change = pair[1] - pair[0];
        if change > T::zero() {
            gains.push(change);
        } else if change < T::zero() {
            losses.push(-change);
        }
    }
    (gains, losses)
}

/// Largest value of a slice; `NaN` values are ignored.
///
/// Returns `NaN` for an empty slice.
#[inline]
#[must_use]
pub fn highest<T: SeriesElement>(data: &[T]) -> T {
    data.iter().fold(T::nan(), |acc, &x| acc.max(x))
}

/// Smallest value of a slice; `NaN` values are ignored.
///
/// Returns `NaN` for an empty slice.
#[inline]
#[must_use]
pub fn lowest<T: SeriesElement>(data: &[T]) -> T {
    data.iter().fold(T::nan(), |acc, &x| acc.min(x))
}

/// Index of the most recent occurrence of the largest value.
#[must_use]
pub fn last_index_of_highest<T: SeriesElement>(data: &[T]) -> Option<usize> {
    let max = highest(data);
    data.iter().rposition(|&x| x == max)
}

/// Index of the most recent occurrence of the smallest value.
#[must_use]
pub fn last_index_of_lowest<T: SeriesElement>(data: &[T]) -> Option<usize> {
    let min = lowest(data);
    data.iter().rposition(|&x| x == min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0_f64, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
        assert!(approx_eq(1.0_f32, 1.000_001, 1e-5));
    }

    #[test]
    fn test_approx_eq_degenerate_values() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, EPSILON));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, EPSILON));
    }

    #[test]
    fn test_sum_and_changes() {
        let data = [100.2_f64, 100.46, 100.38];
        assert!(approx_eq(sum(&data), 301.04, EPSILON));
        let changes = price_changes(&data);
        assert_eq!(changes.len(), 2);
        assert!(approx_eq(changes[0], 0.26, 1e-9));
        assert!(approx_eq(changes[1], -0.08, 1e-9));
        assert!(price_changes::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_gains_and_losses_skip_flat_moves() {
        let (gains, losses) = gains_and_losses(&[1.0_f64, 2.0, 2.0, 1.5, 3.0]);
        assert_eq!(gains, vec![1.0, 1.5]);
        assert_eq!(losses, vec![0.5]);
    }

    #[test]
    fn test_extrema_and_tie_indices() {
        let data = [101.26_f64, 102.57, 102.57, 100.69];
        assert_eq!(highest(&data), 102.57);
        assert_eq!(lowest(&data), 100.69);
        assert_eq!(last_index_of_highest(&data), Some(2));
        assert_eq!(last_index_of_lowest(&data), Some(3));
        assert_eq!(last_index_of_highest::<f64>(&[]), None);
        assert!(highest::<f64>(&[]).is_nan());
    }
}
