//! Ordinary least squares over `(x, y)` points.

use crate::error::Result;
use crate::traits::{validate_aligned, SeriesElement, ValidatedInput};

/// A fitted straight line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendLine<T> {
    /// Change in `y` per unit of `x`.
    pub slope: T,
    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: SeriesElement> TrendLine<T> {
    /// The fitted value at `x`.
    #[inline]
    #[must_use]
    pub fn value_at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

/// Goodness of fit of a [`TrendLine`] over the points it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics<T> {
    /// Sum of squared residuals.
    pub sum_squared_residuals: T,
    /// `R²` adjusted for one regressor; plain `R²` for two points, `1` for a
    /// flat series.
    pub adjusted_r_squared: T,
    /// Root mean squared residual, `sqrt(SSR / n)`.
    pub rmse: T,
    /// Durbin–Watson statistic of the residuals; `NaN` for a perfect fit.
    pub durbin_watson: T,
}

impl<T: SeriesElement> FitStatistics<T> {
    /// Whether the statistics carry no information (a perfect fit).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.sum_squared_residuals == T::zero() || self.durbin_watson.is_nan()
    }
}

fn mean_of<T: SeriesElement>(values: &[T]) -> Result<T> {
    let total = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(total / T::from_usize(values.len())?)
}

/// Least squares line through the points `(xs[i], ys[i])`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `xs` and `ys` differ in length, or
/// `Error::InsufficientData` for fewer than two points.
///
/// # Example
///
/// ```
/// use fast_ti::chart_trends::least_squares;
///
/// let line = least_squares(&[1.0_f64, 6.0], &[102.57, 102.01]).unwrap();
/// assert!((line.slope - -0.112).abs() < 1e-9);
/// assert!((line.intercept - 102.682).abs() < 1e-9);
/// ```
pub fn least_squares<T: SeriesElement>(xs: &[T], ys: &[T]) -> Result<TrendLine<T>> {
    validate_aligned(("xs", xs), &[("ys", ys)])?;
    xs.validate_min_length(2, "least squares")?;

    let mean_x = mean_of(xs)?;
    let mean_y = mean_of(ys)?;
    let (covariance, variance) = xs
        .iter()
        .zip(ys)
        .fold((T::zero(), T::zero()), |(cov, var), (&x, &y)| {
            (cov + (x - mean_x) * (y - mean_y), var + (x - mean_x) * (x - mean_x))
        });
    let slope = covariance / variance;
    Ok(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Goodness-of-fit statistics of `line` over the points `(xs[i], ys[i])`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `xs` and `ys` differ in length, or
/// `Error::EmptyInput` if they are empty.
pub fn fit_statistics<T: SeriesElement>(
    xs: &[T],
    ys: &[T],
    line: &TrendLine<T>,
) -> Result<FitStatistics<T>> {
    validate_aligned(("xs", xs), &[("ys", ys)])?;
    let n = xs.len();
    let count = T::from_usize(n)?;
    let mean_y = mean_of(ys)?;

    let residuals: Vec<T> = xs.iter().zip(ys).map(|(&x, &y)| y - line.value_at(x)).collect();
    let sum_squared_residuals = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
    let total = ys
        .iter()
        .fold(T::zero(), |acc, &y| acc + (y - mean_y) * (y - mean_y));

    let r_squared = if total > T::zero() {
        T::one() - sum_squared_residuals / total
    } else {
        T::one()
    };
    let adjusted_r_squared = if n > 2 {
        T::one() - (T::one() - r_squared) * (count - T::one()) / (count - T::two())
    } else {
        r_squared
    };
    let durbin_watson = if sum_squared_residuals > T::zero() {
        let successive = residuals
            .windows(2)
            .fold(T::zero(), |acc, pair| acc + (pair[1] - pair[0]).powi(2));
        successive / sum_squared_residuals
    } else {
        T::nan()
    };

    Ok(FitStatistics {
        sum_squared_residuals,
        adjusted_r_squared,
        rmse: (sum_squared_residuals / count).sqrt(),
        durbin_watson,
    })
}

/// Positions `start..=end` as regression abscissae.
pub(crate) fn index_axis<T: SeriesElement>(start: usize, end: usize) -> Result<Vec<T>> {
    (start..=end).map(T::from_usize).collect()
}

/// Least squares line through the whole series, against the indices `0..L`.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than two prices.
pub fn overall_trend<T: SeriesElement>(prices: &[T]) -> Result<TrendLine<T>> {
    prices.validate_min_length(2, "overall trend")?;
    least_squares(&index_axis(0, prices.len() - 1)?, prices)
}
