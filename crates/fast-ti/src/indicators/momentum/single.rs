//! Single-window momentum indicators.
//!
//! Each function evaluates the whole slice it is given as one window.

use crate::chained;
use crate::error::Result;
use crate::indicators::momentum::{ChaikinOscillator, McGinleyCci, McGinleyMacd};
use crate::models::{central_tendency, deviation, ConstantModelType, DeviationModel};
use crate::traits::{validate_aligned, validate_short_long, SeriesElement, ValidatedInput};
use crate::utils::{gains_and_losses, highest, lowest, sum};

/// Relative Strength Index.
///
/// ```text
/// RSI = 100 - 100 / (1 + model(gains) / model(losses))
/// ```
///
/// Gains and losses are the magnitudes of the non-zero up and down moves
/// between consecutive prices. Returns `0` when there are no gains and `100`
/// when there are gains but no losses.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn relative_strength_index<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
) -> Result<T> {
    prices.validate_not_empty()?;
    let (gains, losses) = gains_and_losses(prices);
    if gains.is_empty() {
        return Ok(T::zero());
    }
    if losses.is_empty() {
        return Ok(T::hundred());
    }
    let average_gain = central_tendency(&gains, model)?;
    let average_loss = central_tendency(&losses, model)?;
    let hundred = T::hundred();
    Ok(hundred - hundred / (T::one() + average_gain / average_loss))
}

/// Stochastic Oscillator: where the last price sits in the window's range, in percent.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn stochastic_oscillator<T: SeriesElement>(prices: &[T]) -> Result<T> {
    prices.validate_not_empty()?;
    let min = lowest(prices);
    let max = highest(prices);
    let last = prices[prices.len() - 1];
    Ok(T::hundred() * (last - min) / (max - min))
}

/// Slow stochastic: the central value of a run of stochastic oscillator values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `stochastics` is empty.
pub fn slow_stochastic<T: SeriesElement>(stochastics: &[T], model: ConstantModelType) -> Result<T> {
    central_tendency(stochastics, model)
}

/// Slowest stochastic: the central value of a run of slow stochastic values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `slow_stochastics` is empty.
pub fn slowest_stochastic<T: SeriesElement>(
    slow_stochastics: &[T],
    model: ConstantModelType,
) -> Result<T> {
    central_tendency(slow_stochastics, model)
}

/// Williams %R of `close` against the window's highest high and lowest low.
///
/// ```text
/// %R = 100 · (close - max(high)) / (max(high) - min(low))
/// ```
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length, or
/// `Error::EmptyInput` if they are empty.
pub fn williams_percent_r<T: SeriesElement>(high: &[T], low: &[T], close: T) -> Result<T> {
    validate_aligned(("high", high), &[("low", low)])?;
    let max_high = highest(high);
    let min_low = lowest(low);
    Ok(T::hundred() * (close - max_high) / (max_high - min_low))
}

/// Money Flow Index.
///
/// The raw money flow of each bar is `price · volume`. A bar whose raw flow
/// rises from the previous bar adds to the positive flow, one that falls adds
/// to the negative flow. Returns `100` when there is no negative flow and `0`
/// when there is no positive flow.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `prices` and `volume` differ in length,
/// or `Error::EmptyInput` if they are empty.
pub fn money_flow_index<T: SeriesElement>(prices: &[T], volume: &[T]) -> Result<T> {
    validate_aligned(("prices", prices), &[("volume", volume)])?;
    let raw_flow: Vec<T> = prices.iter().zip(volume).map(|(&p, &v)| p * v).collect();

    let mut positive = T::zero();
    let mut negative = T::zero();
    for pair in raw_flow.windows(2) {
        if pair[1] > pair[0] {
            positive = positive + pair[1];
        } else if pair[1] < pair[0] {
            negative = negative + pair[1];
        }
    }

    if negative == T::zero() {
        return Ok(T::hundred());
    }
    if positive == T::zero() {
        return Ok(T::zero());
    }
    let hundred = T::hundred();
    Ok(hundred - hundred / (T::one() + positive / negative))
}

/// Rate of change between two prices, in percent.
#[inline]
#[must_use]
pub fn rate_of_change<T: SeriesElement>(current_price: T, previous_price: T) -> T {
    T::hundred() * (current_price - previous_price) / previous_price
}

/// One step of On-Balance Volume. See [`chained::on_balance_volume`].
#[inline]
#[must_use]
pub fn on_balance_volume<T: SeriesElement>(
    current_price: T,
    previous_price: T,
    current_volume: T,
    previous_obv: T,
) -> T {
    chained::on_balance_volume(current_price, previous_price, current_volume, previous_obv)
}

/// Commodity Channel Index.
///
/// ```text
/// CCI = (last - model(prices)) / (constant_multiplier · deviation(prices))
/// ```
///
/// The traditional multiplier is `0.015` with a simple average and mean
/// absolute deviation.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn commodity_channel_index<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    constant_multiplier: T,
) -> Result<T> {
    prices.validate_not_empty()?;
    let center = central_tendency(prices, model)?;
    let spread = deviation(prices, deviation_model)?;
    let last = prices[prices.len() - 1];
    Ok((last - center) / (constant_multiplier * spread))
}

/// Commodity Channel Index measured against the McGinley Dynamic.
///
/// The McGinley Dynamic is stepped from `previous_mcginley_dynamic` with the
/// slice length as its period; the deviation is the window's own.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn mcginley_dynamic_commodity_channel_index<T: SeriesElement>(
    prices: &[T],
    previous_mcginley_dynamic: T,
    deviation_model: DeviationModel,
    constant_multiplier: T,
) -> Result<McGinleyCci<T>> {
    prices.validate_not_empty()?;
    let last = prices[prices.len() - 1];
    let mcginley_dynamic =
        chained::mcginley_dynamic(last, previous_mcginley_dynamic, prices.len())?;
    let spread = deviation(prices, deviation_model)?;
    Ok(McGinleyCci {
        cci: (last - mcginley_dynamic) / (constant_multiplier * spread),
        mcginley_dynamic,
    })
}

/// MACD line: the short model of the last `short_period` prices minus the long
/// model of the whole slice.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `short_period` is zero or not below the slice length.
pub fn macd_line<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> Result<T> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, prices.len())?;
    let short = central_tendency(&prices[prices.len() - short_period..], short_model)?;
    let long = central_tendency(prices, long_model)?;
    Ok(short - long)
}

/// Signal line: the central value of a run of MACD values.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `macds` is empty.
pub fn signal_line<T: SeriesElement>(macds: &[T], model: ConstantModelType) -> Result<T> {
    central_tendency(macds, model)
}

/// MACD line built from two McGinley Dynamics.
///
/// The short dynamic uses `short_period`, the long one the slice length. Both
/// step from their previous values (zero starts at the last price, which makes
/// the first MACD zero).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `short_period` is zero or not below the slice length.
pub fn mcginley_dynamic_macd_line<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    previous_short_mcginley: T,
    previous_long_mcginley: T,
) -> Result<McGinleyMacd<T>> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, prices.len())?;
    let last = prices[prices.len() - 1];
    let short_mcginley = chained::mcginley_dynamic(last, previous_short_mcginley, short_period)?;
    let long_mcginley = chained::mcginley_dynamic(last, previous_long_mcginley, prices.len())?;
    Ok(McGinleyMacd {
        macd: short_mcginley - long_mcginley,
        short_mcginley,
        long_mcginley,
    })
}

/// Chaikin Oscillator.
///
/// Accumulates the accumulation/distribution line over every bar of the window,
/// starting from `previous_accumulation_distribution`, then subtracts the long
/// model of the whole line from the short model of its last `short_period`
/// values.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `short_period` is zero or not below the number of bars.
#[allow(clippy::too_many_arguments)]
pub fn chaikin_oscillator<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    short_period: usize,
    previous_accumulation_distribution: T,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> Result<ChaikinOscillator<T>> {
    validate_aligned(
        ("high", high),
        &[("low", low), ("close", close), ("volume", volume)],
    )?;
    validate_short_long(short_period, high.len())?;

    let mut accumulation_distribution = previous_accumulation_distribution;
    let mut line = Vec::with_capacity(high.len());
    for (((&h, &l), &c), &v) in high.iter().zip(low).zip(close).zip(volume) {
        accumulation_distribution =
            chained::accumulation_distribution(h, l, c, v, accumulation_distribution);
        line.push(accumulation_distribution);
    }

    let short = central_tendency(&line[line.len() - short_period..], short_model)?;
    let long = central_tendency(&line, long_model)?;
    Ok(ChaikinOscillator {
        oscillator: short - long,
        accumulation_distribution,
    })
}

/// Percentage Price Oscillator: the MACD line as a percentage of the long model.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `short_period` is zero or not below the slice length.
pub fn percentage_price_oscillator<T: SeriesElement>(
    prices: &[T],
    short_period: usize,
    model: ConstantModelType,
) -> Result<T> {
    prices.validate_not_empty()?;
    validate_short_long(short_period, prices.len())?;
    let short = central_tendency(&prices[prices.len() - short_period..], model)?;
    let long = central_tendency(prices, model)?;
    Ok(T::hundred() * (short - long) / long)
}

/// Chande Momentum Oscillator.
///
/// ```text
/// CMO = 100 · (Σ gains - Σ losses) / (Σ gains + Σ losses)
/// ```
///
/// Returns `100` when the window has no losses (including a flat window) and
/// `-100` when it has no gains.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn chande_momentum_oscillator<T: SeriesElement>(prices: &[T]) -> Result<T> {
    prices.validate_not_empty()?;
    let (gains, losses) = gains_and_losses(prices);
    let hundred = T::hundred();
    // A flat window has neither gains nor losses and reads as +100.
    if losses.is_empty() {
        return Ok(hundred);
    }
    if gains.is_empty() {
        return Ok(-hundred);
    }
    let total_gain = sum(&gains);
    let total_loss = sum(&losses);
    Ok(hundred * (total_gain - total_loss) / (total_gain + total_loss))
}
