//! Rolling correlation.

use crate::error::Result;
use crate::indicators::correlation::single;
use crate::kernels::window::rolling_indexed;
use crate::models::{ConstantModelType, DeviationModel};
use crate::traits::{validate_aligned, SeriesElement};

/// Correlation of every window of `period` aligned prices.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn correlate_asset_prices<T: SeriesElement>(
    prices_asset_a: &[T],
    prices_asset_b: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    period: usize,
) -> Result<Vec<T>> {
    validate_aligned(
        ("prices_asset_a", prices_asset_a),
        &[("prices_asset_b", prices_asset_b)],
    )?;
    rolling_indexed(prices_asset_a.len(), period, |range| {
        single::correlate_asset_prices(
            &prices_asset_a[range.clone()],
            &prices_asset_b[range],
            model,
            deviation_model,
        )
    })
}
