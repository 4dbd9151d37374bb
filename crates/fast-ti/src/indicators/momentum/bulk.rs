//! Rolling momentum indicators.
//!
//! Windowed functions return one value per window of `period` inputs, oldest
//! first. [`rate_of_change`] and [`on_balance_volume`] work on consecutive
//! pairs and return `L - 1` values.

use crate::chained;
use crate::error::Result;
use crate::indicators::momentum::{single, ChaikinOscillator, McGinleyCci, McGinleyMacd};
use crate::kernels::rolling_extrema::{rolling_max, rolling_min};
use crate::kernels::window::{rolling, rolling_indexed, rolling_with_state};
use crate::models::{ConstantModelType, DeviationModel};
use crate::traits::{
    validate_aligned, validate_period, validate_short_long, SeriesElement, ValidatedInput,
};

/// Rolling Relative Strength Index.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn relative_strength_index<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling(prices, period, |window| {
        single::relative_strength_index(window, model)
    })
}

/// Rolling Stochastic Oscillator.
///
/// Uses the rolling extrema kernel, so the whole series is scanned once.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn stochastic_oscillator<T: SeriesElement>(prices: &[T], period: usize) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    let highs = rolling_max(prices, period)?;
    let lows = rolling_min(prices, period)?;
    let hundred = T::hundred();
    Ok(highs
        .iter()
        .zip(&lows)
        .zip(&prices[prices.len().min(period - 1)..])
        .map(|((&max, &min), &last)| hundred * (last - min) / (max - min))
        .collect())
}

/// Rolling slow stochastic over a series of stochastic values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `stochastics` is empty, or
/// `Error::InvalidPeriod` if `period` is zero.
pub fn slow_stochastic<T: SeriesElement>(
    stochastics: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    stochastics.validate_not_empty()?;
    rolling(stochastics, period, |window| {
        single::slow_stochastic(window, model)
    })
}

/// Rolling slowest stochastic over a series of slow stochastic values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `slow_stochastics` is empty, or
/// `Error::InvalidPeriod` if `period` is zero.
pub fn slowest_stochastic<T: SeriesElement>(
    slow_stochastics: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    slow_stochastics.validate_not_empty()?;
    rolling(slow_stochastics, period, |window| {
        single::slowest_stochastic(window, model)
    })
}

/// Rolling Williams %R; each window is measured against its own last close.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn williams_percent_r<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_aligned(("high", high), &[("low", low), ("close", close)])?;
    validate_period(period)?;
    let highs = rolling_max(high, period)?;
    let lows = rolling_min(low, period)?;
    let hundred = T::hundred();
    Ok(highs
        .iter()
        .zip(&lows)
        .zip(&close[close.len().min(period - 1)..])
        .map(|((&max_high, &min_low), &last)| hundred * (last - max_high) / (max_high - min_low))
        .collect())
}

/// Rolling Money Flow Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `prices` and `volume` differ in length,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn money_flow_index<T: SeriesElement>(
    prices: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_aligned(("prices", prices), &[("volume", volume)])?;
    rolling_indexed(prices.len(), period, |range| {
        single::money_flow_index(&prices[range.clone()], &volume[range])
    })
}

/// Rate of change between every pair of consecutive prices (`L - 1` values).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn rate_of_change<T: SeriesElement>(prices: &[T]) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    Ok(prices
        .windows(2)
        .map(|pair| single::rate_of_change(pair[1], pair[0]))
        .collect())
}

/// On-Balance Volume chained over the series (`L - 1` values).
///
/// The first output moves `previous_obv` by the volume of the second bar.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `prices` and `volume` differ in length,
/// or `Error::EmptyInput` if they are empty.
pub fn on_balance_volume<T: SeriesElement>(
    prices: &[T],
    volume: &[T],
    previous_obv: T,
) -> Result<Vec<T>> {
    validate_aligned(("prices", prices), &[("volume", volume)])?;
    let mut obv = previous_obv;
    Ok(prices
        .windows(2)
        .zip(&volume[1..])
        .map(|(pair, &v)| {
            obv = chained::on_balance_volume(pair[1], pair[0], v, obv);
            obv
        })
        .collect())
}

/// Rolling Commodity Channel Index.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn commodity_channel_index<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    constant_multiplier: T,
    period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling(prices, period, |window| {
        single::commodity_channel_index(window, model, deviation_model, constant_multiplier)
    })
}

/// Rolling McGinley Dynamic Commodity Channel Index, chaining the dynamic from
/// one window into the next.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn mcginley_dynamic_commodity_channel_index<T: SeriesElement>(
    prices: &[T],
    previous_mcginley_dynamic: T,
    deviation_model: DeviationModel,
    constant_multiplier: T,
    period: usize,
) -> Result<Vec<McGinleyCci<T>>> {
    prices.validate_not_empty()?;
    rolling_with_state(
        prices.len(),
        period,
        previous_mcginley_dynamic,
        |range, previous| {
            let out = single::mcginley_dynamic_commodity_channel_index(
                &prices[range],
                previous,
                deviation_model,
                constant_multiplier,
            )?;
            Ok((out, out.mcginley_dynamic))
        },
    )
}

/// Rolling MACD line over windows of `long_period` prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if either period is zero or `short_period >= long_period`.
pub fn macd_line<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    short_model: ConstantModelType,
    long_period: usize,
    long_model: ConstantModelType,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, long_period)?;
    rolling(prices, long_period, |window| {
        single::macd_line(window, short_period, short_model, long_model)
    })
}

/// Rolling signal line over a series of MACD values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `macds` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn signal_line<T: SeriesElement>(
    macds: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    macds.validate_not_empty()?;
    rolling(macds, period, |window| single::signal_line(window, model))
}

/// Rolling McGinley Dynamic MACD line over windows of `long_period` prices,
/// chaining both dynamics from one window into the next.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if either period is zero or `short_period >= long_period`.
pub fn mcginley_dynamic_macd_line<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    previous_short_mcginley: T,
    long_period: usize,
    previous_long_mcginley: T,
) -> Result<Vec<McGinleyMacd<T>>> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, long_period)?;
    rolling_with_state(
        prices.len(),
        long_period,
        (previous_short_mcginley, previous_long_mcginley),
        |range, (previous_short, previous_long)| {
            let out = single::mcginley_dynamic_macd_line(
                &prices[range],
                short_period,
                previous_short,
                previous_long,
            )?;
            Ok((out, (out.short_mcginley, out.long_mcginley)))
        },
    )
}

/// Rolling Chaikin Oscillator over windows of `long_period` bars.
///
/// Each window re-accumulates the accumulation/distribution line over all of
/// its bars, starting from the final value of the previous window
/// (`previous_accumulation_distribution` for the first).
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if either
/// period is zero or `short_period >= long_period`.
#[allow(clippy::too_many_arguments)]
pub fn chaikin_oscillator<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    short_period: usize,
    long_period: usize,
    previous_accumulation_distribution: T,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> Result<Vec<ChaikinOscillator<T>>> {
    validate_aligned(
        ("high", high),
        &[("low", low), ("close", close), ("volume", volume)],
    )?;
    validate_short_long(short_period, long_period)?;
    rolling_with_state(
        high.len(),
        long_period,
        previous_accumulation_distribution,
        |range, previous| {
            let out = single::chaikin_oscillator(
                &high[range.clone()],
                &low[range.clone()],
                &close[range.clone()],
                &volume[range],
                short_period,
                previous,
                short_model,
                long_model,
            )?;
            Ok((out, out.accumulation_distribution))
        },
    )
}

/// Rolling Percentage Price Oscillator over windows of `long_period` prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if either period is zero or `short_period >= long_period`.
pub fn percentage_price_oscillator<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    long_period: usize,
    model: ConstantModelType,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, long_period)?;
    rolling(prices, long_period, |window| {
        single::percentage_price_oscillator(window, short_period, model)
    })
}

/// Rolling Chande Momentum Oscillator.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn chande_momentum_oscillator<T: SeriesElement>(
    prices: &[T],
    period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling(prices, period, single::chande_momentum_oscillator)
}
