//! Single-window moving averages.

use crate::chained;
use crate::error::Result;
use crate::indicators::moving_average::MovingAverageType;
use crate::models::central_tendency;
use crate::traits::SeriesElement;

/// Moving average of the whole slice.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::moving_average::{single, MovingAverageType};
///
/// let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
/// let ema = single::moving_average(&prices, MovingAverageType::Exponential).unwrap();
/// assert!((ema - 100.32810426540287).abs() < 1e-10);
/// ```
pub fn moving_average<T: SeriesElement>(prices: &[T], ma_type: MovingAverageType) -> Result<T> {
    central_tendency(prices, ma_type.into())
}

/// One step of the McGinley Dynamic.
///
/// A `previous` of zero starts the chain at `latest_price`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn mcginley_dynamic<T: SeriesElement>(latest_price: T, previous: T, period: usize) -> Result<T> {
    chained::mcginley_dynamic(latest_price, previous, period)
}
