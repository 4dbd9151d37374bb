//! Central tendency ("constant") models.
//!
//! A central tendency model summarises a window of values into one
//! representative value. Nearly every indicator in the crate is parameterised
//! by a [`ConstantModelType`], so the same RSI or CCI can be computed with a
//! mean, a smoothed mean, an exponential mean, a median or a mode.
//!
//! # Formula
//!
//! ```text
//! Simple:      mean(v)
//! Weighted:    Σ v[age]·(1-α)^age / Σ (1-α)^age      (age 0 = most recent value)
//!   Exponential  α = 2 / (N + 1)
//!   Smoothed     α = 1 / N
//!   Personalised α = nominator / (N + denominator)
//! Median:      middle of the sorted window (mean of the two middles for even N)
//! Mode:        mean of the most frequent values after rounding to integers
//! ```
//!
//! `N` is always the length of the slice passed in: callers hand over exactly
//! the window to be summarised.
//!
//! # Example
//!
//! ```
//! use fast_ti::models::{central_tendency, ConstantModelType};
//!
//! let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
//! let sma = central_tendency(&prices, ConstantModelType::SimpleMovingAverage).unwrap();
//! assert!((sma - 100.354).abs() < 1e-10);
//! ```
//!
//! # Errors
//!
//! Every function returns `Error::EmptyInput` for an empty slice.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::traits::{SeriesElement, ValidatedInput};
use crate::utils::sum;

/// Selects how a window of values is reduced to a single central value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantModelType {
    /// Arithmetic mean.
    SimpleMovingAverage,
    /// Weighted mean with smoothing factor `1 / N`.
    SmoothedMovingAverage,
    /// Weighted mean with smoothing factor `2 / (N + 1)`.
    ExponentialMovingAverage,
    /// Median of the window.
    SimpleMovingMedian,
    /// Mean of the most frequent values, after rounding to the nearest integer.
    SimpleMovingMode,
    /// Weighted mean with smoothing factor `alpha_nominator / (N + alpha_denominator)`.
    PersonalisedMovingAverage {
        /// Numerator of the smoothing factor.
        alpha_nominator: f64,
        /// Offset added to the window length in the denominator.
        alpha_denominator: f64,
    },
}

/// Reduces `values` to a single central value using `model`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty, or
/// `Error::NumericConversion` if a personalised factor cannot be represented.
pub fn central_tendency<T: SeriesElement>(values: &[T], model: ConstantModelType) -> Result<T> {
    match model {
        ConstantModelType::SimpleMovingAverage => mean(values),
        ConstantModelType::SmoothedMovingAverage => smoothed_moving_average(values),
        ConstantModelType::ExponentialMovingAverage => exponential_moving_average(values),
        ConstantModelType::SimpleMovingMedian => median(values),
        ConstantModelType::SimpleMovingMode => mode(values),
        ConstantModelType::PersonalisedMovingAverage {
            alpha_nominator,
            alpha_denominator,
        } => personalised_moving_average(
            values,
            T::from_f64(alpha_nominator)?,
            T::from_f64(alpha_denominator)?,
        ),
    }
}

/// Arithmetic mean of `values`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn mean<T: SeriesElement>(values: &[T]) -> Result<T> {
    values.validate_not_empty()?;
    Ok(sum(values) / T::from_usize(values.len())?)
}

/// Exponential moving average of the whole slice (`α = 2 / (N + 1)`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn exponential_moving_average<T: SeriesElement>(values: &[T]) -> Result<T> {
    personalised_moving_average(values, T::two(), T::one())
}

/// Smoothed (Wilder) moving average of the whole slice (`α = 1 / N`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn smoothed_moving_average<T: SeriesElement>(values: &[T]) -> Result<T> {
    personalised_moving_average(values, T::one(), T::zero())
}

/// Weighted moving average with `α = alpha_nominator / (N + alpha_denominator)`.
///
/// The most recent value has weight 1 and each older value is discounted by a
/// further factor of `1 - α`. The weights are normalised, so a constant series
/// averages to itself for any `α`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn personalised_moving_average<T: SeriesElement>(
    values: &[T],
    alpha_nominator: T,
    alpha_denominator: T,
) -> Result<T> {
    values.validate_not_empty()?;
    let alpha = alpha_nominator / (T::from_usize(values.len())? + alpha_denominator);
    let decay = T::one() - alpha;

    let mut weight = T::one();
    let mut numerator = T::zero();
    let mut denominator = T::zero();
    for &value in values.iter().rev() {
        numerator = numerator + value * weight;
        denominator = denominator + weight;
        weight = weight * decay;
    }
    Ok(numerator / denominator)
}

/// Median of `values`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn median<T: SeriesElement>(values: &[T]) -> Result<T> {
    values.validate_not_empty()?;
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / T::two())
    } else {
        Ok(sorted[mid])
    }
}

/// Mode of `values`.
///
/// Values are rounded to the nearest integer (half away from zero) before
/// counting, so continuous price data still has a meaningful mode. When several
/// rounded values share the highest frequency their mean is returned.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn mode<T: SeriesElement>(values: &[T]) -> Result<T> {
    values.validate_not_empty()?;
    let rounded: Vec<T> = values.iter().map(|v| v.round()).collect();
    let sorted = sorted_copy(&rounded);

    let mut best_count = 0_usize;
    let mut modes: Vec<T> = Vec::new();
    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];
        let run = sorted[start..].iter().take_while(|&&x| x == value).count().max(1);
        match run.cmp(&best_count) {
            Ordering::Greater => {
                best_count = run;
                modes.clear();
                modes.push(value);
            }
            Ordering::Equal => modes.push(value),
            Ordering::Less => {}
        }
        start += run;
    }

    if modes.is_empty() {
        return Err(Error::EmptyInput);
    }
    mean(&modes)
}

fn sorted_copy<T: SeriesElement>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}
