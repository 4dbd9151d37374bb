//! Single-window volatility indicators.

use crate::error::Result;
use crate::models;
use crate::traits::SeriesElement;

/// Ulcer Index of a window.
///
/// ```text
/// drawdown_i = 100 · (p_i - max(p_0..=p_i)) / max(p_0..=p_i)
/// ulcer      = sqrt(mean(drawdown²))
/// ```
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn ulcer_index<T: SeriesElement>(prices: &[T]) -> Result<T> {
    models::ulcer_index(prices)
}
