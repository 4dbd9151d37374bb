//! Correlation of one window.

use crate::error::Result;
use crate::models::{central_tendency, deviation, ConstantModelType, DeviationModel};
use crate::traits::{validate_aligned, SeriesElement};

/// Correlation of two equally long price series.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::EmptyInput` if they are empty.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::correlation::single::correlate_asset_prices;
/// use fast_ti::models::{ConstantModelType, DeviationModel};
///
/// let a = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
/// let b = [74.71_f64, 71.98, 68.33, 63.6, 65.92];
/// let corr = correlate_asset_prices(
///     &a,
///     &b,
///     ConstantModelType::SimpleMovingAverage,
///     DeviationModel::StandardDeviation,
/// )
/// .unwrap();
/// assert!((corr - 0.9042213658878326).abs() < 1e-10);
/// ```
pub fn correlate_asset_prices<T: SeriesElement>(
    prices_asset_a: &[T],
    prices_asset_b: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
) -> Result<T> {
    validate_aligned(
        ("prices_asset_a", prices_asset_a),
        &[("prices_asset_b", prices_asset_b)],
    )?;
    let center_a = central_tendency(prices_asset_a, model)?;
    let center_b = central_tendency(prices_asset_b, model)?;

    let co_moves = prices_asset_a
        .iter()
        .zip(prices_asset_b)
        .fold(T::zero(), |acc, (&a, &b)| acc + (a - center_a) * (b - center_b));
    let covariance = co_moves / T::from_usize(prices_asset_a.len())?;

    let spread = deviation(prices_asset_a, deviation_model)? * deviation(prices_asset_b, deviation_model)?;
    Ok(covariance / spread)
}
