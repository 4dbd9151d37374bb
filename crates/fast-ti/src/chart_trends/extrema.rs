//! Peak and valley detection.
//!
//! Every window of `period` prices nominates its extreme (the most recent one
//! on ties). Nominations are merged in order: a point already accepted is
//! skipped, a point within `closest_neighbor` positions of the last accepted
//! one replaces it only if strictly more extreme, and anything else is
//! accepted as a new pivot.

use crate::chart_trends::regression::{least_squares, TrendLine};
use crate::error::{Error, Result};
use crate::kernels::rolling_extrema::{rolling_extreme_with_index, Extreme};
use crate::traits::{SeriesElement, ValidatedInput};

fn pivots<T: SeriesElement>(
    prices: &[T],
    period: usize,
    closest_neighbor: usize,
    extreme: Extreme,
) -> Result<Vec<(T, usize)>> {
    prices.validate_not_empty()?;
    if period > prices.len() {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period is longer than the series",
        });
    }

    let mut accepted: Vec<(T, usize)> = Vec::new();
    for (value, index) in rolling_extreme_with_index(prices, period, extreme)? {
        if value.is_nan() {
            continue;
        }
        match accepted.last_mut() {
            Some(last) if last.1 == index => {}
            Some(last) if index.saturating_sub(last.1) <= closest_neighbor => {
                let more_extreme = match extreme {
                    Extreme::Max => value > last.0,
                    Extreme::Min => value < last.0,
                };
                if more_extreme {
                    *last = (value, index);
                }
            }
            _ => accepted.push((value, index)),
        }
    }
    Ok(accepted)
}

/// Peaks of the series as `(value, index)` pairs, oldest first.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero or longer than the series.
///
/// # Example
///
/// ```
/// use fast_ti::chart_trends::peaks;
///
/// let highs = [101.26_f64, 102.57, 102.32, 100.69, 100.83, 101.73, 102.01];
/// assert_eq!(peaks(&highs, 4, 1).unwrap(), vec![(102.57, 1), (102.01, 6)]);
/// ```
pub fn peaks<T: SeriesElement>(
    prices: &[T],
    period: usize,
    closest_neighbor: usize,
) -> Result<Vec<(T, usize)>> {
    pivots(prices, period, closest_neighbor, Extreme::Max)
}

/// Valleys of the series as `(value, index)` pairs, oldest first.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero or longer than the series.
pub fn valleys<T: SeriesElement>(
    prices: &[T],
    period: usize,
    closest_neighbor: usize,
) -> Result<Vec<(T, usize)>> {
    pivots(prices, period, closest_neighbor, Extreme::Min)
}

fn trend_through<T: SeriesElement>(points: &[(T, usize)], indicator: &'static str) -> Result<TrendLine<T>> {
    let xs = points
        .iter()
        .map(|&(_, index)| T::from_usize(index))
        .collect::<Result<Vec<T>>>()?;
    xs.validate_min_length(2, indicator)?;
    let ys: Vec<T> = points.iter().map(|&(value, _)| value).collect();
    least_squares(&xs, &ys)
}

/// Least squares line through the peaks (closest neighbor 1).
///
/// # Errors
///
/// Returns the errors of [`peaks`], or `Error::InsufficientData` if fewer
/// than two peaks are found.
pub fn peak_trend<T: SeriesElement>(prices: &[T], period: usize) -> Result<TrendLine<T>> {
    trend_through(&peaks(prices, period, 1)?, "peak trend")
}

/// Least squares line through the valleys (closest neighbor 1).
///
/// # Errors
///
/// Returns the errors of [`valleys`], or `Error::InsufficientData` if fewer
/// than two valleys are found.
pub fn valley_trend<T: SeriesElement>(prices: &[T], period: usize) -> Result<TrendLine<T>> {
    trend_through(&valleys(prices, period, 1)?, "valley trend")
}
