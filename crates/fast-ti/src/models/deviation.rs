//! Deviation models.
//!
//! A deviation model measures how far the values of a window spread from a
//! centre. [`deviation`] uses the centre that matches the model (mean for the
//! standard and mean-absolute deviations, median for the median-absolute
//! deviation, mode for the mode-absolute deviation). [`deviation_about`] takes
//! an external centre instead. The Ulcer Index is self-centring in both forms.
//!
//! # Formula
//!
//! ```text
//! StandardDeviation        sqrt(mean((v - c)²))       population, ÷N
//! MeanAbsoluteDeviation    mean(|v - c|)
//! MedianAbsoluteDeviation  median(|v - c|)
//! ModeAbsoluteDeviation    mode(|v - c|)
//! UlcerIndex               sqrt(mean(drawdown%²)),  drawdown% = 100·(v - runningMax)/runningMax
//! ```
//!
//! Zero deviations are returned as-is: callers dividing by them get `±Infinity`
//! or `NaN`, which is the documented behaviour of the dependent indicators.
//!
//! # Example
//!
//! ```
//! use fast_ti::models::{deviation, DeviationModel};
//!
//! let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
//! let ulcer = deviation(&prices, DeviationModel::UlcerIndex).unwrap();
//! assert!((ulcer - 0.21816086938686668).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::models::central_tendency::{mean, median, mode};
use crate::traits::{SeriesElement, ValidatedInput};

/// Selects how the dispersion of a window is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviationModel {
    /// Population standard deviation.
    StandardDeviation,
    /// Mean of absolute deviations.
    MeanAbsoluteDeviation,
    /// Median of absolute deviations.
    MedianAbsoluteDeviation,
    /// Mode of absolute deviations.
    ModeAbsoluteDeviation,
    /// Root mean square of the percentage drawdowns from the running maximum.
    UlcerIndex,
}

/// Dispersion of `values` about the centre that matches `model`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn deviation<T: SeriesElement>(values: &[T], model: DeviationModel) -> Result<T> {
    values.validate_not_empty()?;
    let center = match model {
        DeviationModel::StandardDeviation | DeviationModel::MeanAbsoluteDeviation => mean(values)?,
        DeviationModel::MedianAbsoluteDeviation => median(values)?,
        DeviationModel::ModeAbsoluteDeviation => mode(values)?,
        DeviationModel::UlcerIndex => return ulcer_index(values),
    };
    deviation_about(values, center, model)
}

/// Dispersion of `values` about an externally supplied `center`.
///
/// The Ulcer Index ignores `center`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn deviation_about<T: SeriesElement>(
    values: &[T],
    center: T,
    model: DeviationModel,
) -> Result<T> {
    values.validate_not_empty()?;
    let absolute = || values.iter().map(|&v| (v - center).abs()).collect::<Vec<T>>();
    match model {
        DeviationModel::StandardDeviation => {
            let squares: Vec<T> = values.iter().map(|&v| (v - center).powi(2)).collect();
            Ok(mean(&squares)?.sqrt())
        }
        DeviationModel::MeanAbsoluteDeviation => mean(&absolute()),
        DeviationModel::MedianAbsoluteDeviation => median(&absolute()),
        DeviationModel::ModeAbsoluteDeviation => mode(&absolute()),
        DeviationModel::UlcerIndex => ulcer_index(values),
    }
}

/// Population standard deviation of `values` about their mean.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn standard_deviation<T: SeriesElement>(values: &[T]) -> Result<T> {
    deviation(values, DeviationModel::StandardDeviation)
}

/// Ulcer Index of `values`.
///
/// Measures downside volatility as the quadratic mean of percentage drawdowns
/// from the highest value seen so far within the slice.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `values` is empty.
pub fn ulcer_index<T: SeriesElement>(values: &[T]) -> Result<T> {
    values.validate_not_empty()?;
    let mut running_max = values[0];
    let drawdowns: Vec<T> = values
        .iter()
        .map(|&v| {
            running_max = running_max.max(v);
            (T::hundred() * (v - running_max) / running_max).powi(2)
        })
        .collect();
    Ok(mean(&drawdowns)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    const PRICES: [f64; 5] = [100.46, 100.53, 100.38, 100.19, 100.21];

    #[test]
    fn test_standard_deviation_population() {
        let std = deviation(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], DeviationModel::StandardDeviation)
            .unwrap();
        assert!(approx_eq(std, 2.0, EPSILON));
    }

    #[test]
    fn test_mean_absolute_deviation() {
        let mad = deviation(&[1.0_f64, 2.0, 3.0, 4.0], DeviationModel::MeanAbsoluteDeviation).unwrap();
        assert!(approx_eq(mad, 1.0, EPSILON));
    }

    #[test]
    fn test_median_absolute_deviation() {
        let mad = deviation(&[1.0_f64, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0], DeviationModel::MedianAbsoluteDeviation)
            .unwrap();
        assert!(approx_eq(mad, 1.0, EPSILON));
    }

    #[test]
    fn test_mode_absolute_deviation_of_prices_is_zero() {
        // Prices round to a common mode, so the rounded absolute deviations are all zero.
        let value = deviation(&PRICES, DeviationModel::ModeAbsoluteDeviation).unwrap();
        assert!(approx_eq(value, 0.0, EPSILON));
    }

    #[test]
    fn test_ulcer_index() {
        let ulcer = ulcer_index(&PRICES).unwrap();
        assert!(approx_eq(ulcer, 0.218_160_869_386_866_68, EPSILON));
    }

    #[test]
    fn test_ulcer_index_rising_series_is_zero() {
        let ulcer = ulcer_index(&[1.0_f64, 2.0, 3.0]).unwrap();
        assert!(approx_eq(ulcer, 0.0, EPSILON));
    }

    #[test]
    fn test_deviation_about_external_center() {
        let std = deviation_about(&[1.0_f64, 3.0], 0.0, DeviationModel::StandardDeviation).unwrap();
        assert!(approx_eq(std, 5.0_f64.sqrt(), EPSILON));

        let mad = deviation_about(&[1.0_f64, 3.0], 0.0, DeviationModel::MeanAbsoluteDeviation).unwrap();
        assert!(approx_eq(mad, 2.0, EPSILON));

        let ulcer = deviation_about(&PRICES, 1_000.0, DeviationModel::UlcerIndex).unwrap();
        assert!(approx_eq(ulcer, ulcer_index(&PRICES).unwrap(), EPSILON));
    }

    #[test]
    fn test_deviation_matches_own_center() {
        let std = standard_deviation(&PRICES).unwrap();
        let center = mean(&PRICES).unwrap();
        let about = deviation_about(&PRICES, center, DeviationModel::StandardDeviation).unwrap();
        assert!(approx_eq(std, about, EPSILON));
    }

    #[test]
    fn test_empty_input() {
        let empty: [f64; 0] = [];
        assert_eq!(deviation(&empty, DeviationModel::UlcerIndex), Err(Error::EmptyInput));
        assert_eq!(
            deviation_about(&empty, 1.0, DeviationModel::StandardDeviation),
            Err(Error::EmptyInput)
        );
    }
}
