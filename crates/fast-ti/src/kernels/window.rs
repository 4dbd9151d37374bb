//! Sliding-window evaluation engine.
//!
//! Turns any single-window computation into its rolling ("bulk") form. For an
//! input of length `L` and a window of `N` values the output holds
//! `L - N + 1` results, where output `i` is computed from inputs `i..i + N`.
//! A window longer than the input yields an empty output rather than an error.
//!
//! Three entry points cover the shapes of computation in the crate:
//!
//! - [`rolling`]: one series, the closure receives the window slice
//! - [`rolling_indexed`]: several aligned series, the closure receives the index range
//! - [`rolling_with_state`]: like [`rolling_indexed`], threading a caller-visible
//!   state value from each window into the next (McGinley Dynamic, volatility system)
//!
//! # Example
//!
//! ```
//! use fast_ti::kernels::window::rolling;
//! use fast_ti::models::mean;
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
//! let sma = rolling(&prices, 3, mean).unwrap();
//! assert_eq!(sma.len(), 3);
//! assert!((sma[0] - 100.39666666666666).abs() < 1e-10);
//!
//! // A window longer than the data produces nothing.
//! assert!(rolling(&prices, 6, mean).unwrap().is_empty());
//! ```
//!
//! # Errors
//!
//! Every entry point returns `Error::InvalidPeriod` for a zero period and
//! propagates the first error returned by the closure.

use std::ops::Range;

use crate::error::Result;
use crate::traits::validate_period;

/// Number of outputs a rolling evaluation produces.
///
/// # Example
///
/// ```
/// use fast_ti::kernels::window::rolling_len;
///
/// assert_eq!(rolling_len(7, 5), 3);
/// assert_eq!(rolling_len(4, 5), 0);
/// ```
#[inline]
#[must_use]
pub const fn rolling_len(len: usize, period: usize) -> usize {
    if period == 0 || period > len {
        0
    } else {
        len - period + 1
    }
}

/// Evaluates `f` over every window of `period` consecutive values of `data`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero, or the first error returned by `f`.
pub fn rolling<T, R, F>(data: &[T], period: usize, mut f: F) -> Result<Vec<R>>
where
    F: FnMut(&[T]) -> Result<R>,
{
    validate_period(period)?;
    if period > data.len() {
        return Ok(Vec::new());
    }
    let mut output = Vec::with_capacity(rolling_len(data.len(), period));
    for window in data.windows(period) {
        output.push(f(window)?);
    }
    Ok(output)
}

/// Evaluates `f` over the index range of every window of `period` positions
/// in a set of aligned series of length `len`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero, or the first error returned by `f`.
pub fn rolling_indexed<R, F>(len: usize, period: usize, mut f: F) -> Result<Vec<R>>
where
    F: FnMut(Range<usize>) -> Result<R>,
{
    validate_period(period)?;
    let count = rolling_len(len, period);
    let mut output = Vec::with_capacity(count);
    for start in 0..count {
        output.push(f(start..start + period)?);
    }
    Ok(output)
}

/// Like [`rolling_indexed`], threading `state` through the windows in order.
///
/// `f` receives the window range and the state left by the previous window
/// (`initial` for the first one) and returns the window's output together with
/// the state for the next window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero, or the first error returned by `f`.
pub fn rolling_with_state<S, R, F>(len: usize, period: usize, initial: S, mut f: F) -> Result<Vec<R>>
where
    F: FnMut(Range<usize>, S) -> Result<(R, S)>,
{
    validate_period(period)?;
    let count = rolling_len(len, period);
    let mut output = Vec::with_capacity(count);
    let mut state = initial;
    for start in 0..count {
        let (value, next) = f(start..start + period, state)?;
        output.push(value);
        state = next;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // ==================== Length Invariant Tests ====================

    #[test]
    fn test_rolling_output_length() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        for period in 1..=10 {
            let out = rolling(&data, period, |w| Ok(w.len())).unwrap();
            assert_eq!(out.len(), 10 - period + 1);
            assert!(out.iter().all(|&n| n == period));
        }
    }

    #[test]
    fn test_rolling_period_longer_than_data_is_empty() {
        let data = [1.0_f64, 2.0];
        let out: Vec<f64> = rolling(&data, 3, |w| Ok(w[0])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rolling_zero_period_errors() {
        let data = [1.0_f64, 2.0];
        let result: Result<Vec<f64>> = rolling(&data, 0, |w| Ok(w[0]));
        assert!(matches!(result, Err(Error::InvalidPeriod { period: 0, .. })));
    }

    // ==================== Alignment Tests ====================

    #[test]
    fn test_rolling_window_alignment() {
        let data = [1.0_f64, 2.0, 3.0, 4.0];
        let firsts = rolling(&data, 2, |w| Ok(w[0])).unwrap();
        assert_eq!(firsts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rolling_indexed_ranges() {
        let ranges = rolling_indexed(5, 3, Ok).unwrap();
        assert_eq!(ranges, vec![0..3, 1..4, 2..5]);
        assert!(rolling_indexed(2, 3, Ok).unwrap().is_empty());
    }

    #[test]
    fn test_rolling_with_state_threads_forward() {
        let out = rolling_with_state(5, 2, 0_usize, |range, seen| Ok((seen + range.start, seen + 1)))
            .unwrap();
        assert_eq!(out, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_rolling_propagates_first_error() {
        let data = [1.0_f64, 2.0, 3.0];
        let result: Result<Vec<f64>> = rolling(&data, 1, |w| {
            if w[0] > 1.5 {
                Err(Error::EmptyInput)
            } else {
                Ok(w[0])
            }
        });
        assert_eq!(result, Err(Error::EmptyInput));
    }
}
