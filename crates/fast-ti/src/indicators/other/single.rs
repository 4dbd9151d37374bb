//! Single-bar and single-window indicators.

use crate::error::Result;
use crate::indicators::other::ReturnOnInvestment;
use crate::models::{central_tendency, ConstantModelType};
use crate::traits::{validate_aligned, SeriesElement};

/// Value and percentage return of `investment` bought at `start_price` and
/// valued at `end_price`.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::other::single::return_on_investment;
///
/// let roi = return_on_investment(100.0_f64, 110.0, 1000.0);
/// assert!((roi.final_value - 1100.0).abs() < 1e-9);
/// assert!((roi.percent_return - 10.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn return_on_investment<T: SeriesElement>(
    start_price: T,
    end_price: T,
    investment: T,
) -> ReturnOnInvestment<T> {
    let shares = investment / start_price;
    let final_value = end_price * shares;
    ReturnOnInvestment {
        final_value,
        percent_return: (final_value - investment) / investment * T::hundred(),
    }
}

/// True range of one bar.
///
/// ```text
/// TR = max(high - low, |high - close|, |close - low|)
/// ```
#[inline]
#[must_use]
pub fn true_range<T: SeriesElement>(close: T, high: T, low: T) -> T {
    (high - low)
        .max((high - close).abs())
        .max((close - low).abs())
}

/// Average true range: the central value of the true range of every bar, each
/// measured against its own close.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn average_true_range<T: SeriesElement>(
    close: &[T],
    high: &[T],
    low: &[T],
    model: ConstantModelType,
) -> Result<T> {
    validate_aligned(("close", close), &[("high", high), ("low", low)])?;
    let ranges: Vec<T> = close
        .iter()
        .zip(high)
        .zip(low)
        .map(|((&c, &h), &l)| true_range(c, h, l))
        .collect();
    central_tendency(&ranges, model)
}

/// Internal bar strength: where the close sits between the low and the high.
///
/// ```text
/// IBS = (close - low) / (high - low)
/// ```
#[inline]
#[must_use]
pub fn internal_bar_strength<T: SeriesElement>(high: T, low: T, close: T) -> T {
    (close - low) / (high - low)
}
