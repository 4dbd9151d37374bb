//! Rolling standard indicators.

use crate::error::Result;
use crate::indicators::moving_average::{self, MovingAverageType};
use crate::indicators::standard::{Bollinger, Macd, MacdOutput, Rsi};
use crate::indicators::Bands;
use crate::traits::SeriesElement;

/// Rolling simple moving average.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn simple_moving_average<T: SeriesElement>(prices: &[T], period: usize) -> Result<Vec<T>> {
    moving_average::bulk::moving_average(prices, MovingAverageType::Simple, period)
}

/// Rolling smoothed moving average.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn smoothed_moving_average<T: SeriesElement>(prices: &[T], period: usize) -> Result<Vec<T>> {
    moving_average::bulk::moving_average(prices, MovingAverageType::Smoothed, period)
}

/// Rolling exponential moving average.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn exponential_moving_average<T: SeriesElement>(
    prices: &[T],
    period: usize,
) -> Result<Vec<T>> {
    moving_average::bulk::moving_average(prices, MovingAverageType::Exponential, period)
}

/// Bollinger Bands (SMA 20 ± 2σ) of every 20-price window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn bollinger_bands<T: SeriesElement>(prices: &[T]) -> Result<Vec<Bands<T>>> {
    Bollinger::new().compute(prices)
}

/// MACD (12/26/9) of every 34-price window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn macd<T: SeriesElement>(prices: &[T]) -> Result<Vec<MacdOutput<T>>> {
    Macd::new().compute(prices)
}

/// Smoothed RSI of every 14-price window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn rsi<T: SeriesElement>(prices: &[T]) -> Result<Vec<T>> {
    Rsi::new().compute(prices)
}
