//! Single-window standard indicators.

use crate::error::Result;
use crate::indicators::standard::{Bollinger, Macd, MacdOutput, Rsi};
use crate::indicators::Bands;
use crate::models;
use crate::traits::SeriesElement;

/// Arithmetic mean of the prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn simple_moving_average<T: SeriesElement>(prices: &[T]) -> Result<T> {
    models::mean(prices)
}

/// Smoothed moving average of the prices (smoothing factor `1 / N`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn smoothed_moving_average<T: SeriesElement>(prices: &[T]) -> Result<T> {
    models::smoothed_moving_average(prices)
}

/// Exponential moving average of the prices (smoothing factor `2 / (N + 1)`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn exponential_moving_average<T: SeriesElement>(prices: &[T]) -> Result<T> {
    models::exponential_moving_average(prices)
}

/// Bollinger Bands (SMA 20 ± 2σ) of exactly 20 prices.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than 20 prices and
/// `Error::LengthMismatch` for more.
pub fn bollinger_bands<T: SeriesElement>(prices: &[T]) -> Result<Bands<T>> {
    Bollinger::new().compute_window(prices)
}

/// MACD (EMA 12 - EMA 26, signal EMA 9) of exactly 34 prices.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than 34 prices and
/// `Error::LengthMismatch` for more.
pub fn macd<T: SeriesElement>(prices: &[T]) -> Result<MacdOutput<T>> {
    Macd::new().compute_window(prices)
}

/// RSI with smoothed averages of exactly 14 prices.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than 14 prices and
/// `Error::LengthMismatch` for more.
pub fn rsi<T: SeriesElement>(prices: &[T]) -> Result<T> {
    Rsi::new().compute_window(prices)
}
