//! Series forms of the candle indicators.
//!
//! Every function slides a window of `period` bars over its input; the McGinley
//! Dynamic variants also chain the dynamic from one window into the next.

use crate::error::Result;
use crate::indicators::candle::{single, IchimokuCloud};
use crate::indicators::Bands;
use crate::kernels::window::{rolling, rolling_indexed, rolling_with_state};
use crate::models::{ConstantModelType, DeviationModel};
use crate::traits::{validate_aligned, validate_period, SeriesElement, ValidatedInput};

/// Rolling moving constant envelopes.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn moving_constant_envelopes<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    difference: T,
    period: usize,
) -> Result<Vec<Bands<T>>> {
    prices.validate_not_empty()?;
    rolling(prices, period, |window| {
        single::moving_constant_envelopes(window, model, difference)
    })
}

/// Rolling McGinley Dynamic envelopes, chaining the dynamic from
/// `previous_mcginley_dynamic` through every window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn mcginley_dynamic_envelopes<T: SeriesElement>(
    prices: &[T],
    difference: T,
    previous_mcginley_dynamic: T,
    period: usize,
) -> Result<Vec<Bands<T>>> {
    prices.validate_not_empty()?;
    rolling_with_state(prices.len(), period, previous_mcginley_dynamic, |range, previous| {
        let envelope = single::mcginley_dynamic_envelopes(&prices[range], difference, previous)?;
        Ok((envelope, envelope.middle))
    })
}

/// Rolling moving constant bands.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn moving_constant_bands<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    constant_multiplier: T,
    period: usize,
) -> Result<Vec<Bands<T>>> {
    prices.validate_not_empty()?;
    rolling(prices, period, |window| {
        single::moving_constant_bands(window, model, deviation_model, constant_multiplier)
    })
}

/// Rolling McGinley Dynamic bands, chaining the dynamic through every window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn mcginley_dynamic_bands<T: SeriesElement>(
    prices: &[T],
    deviation_model: DeviationModel,
    constant_multiplier: T,
    previous_mcginley_dynamic: T,
    period: usize,
) -> Result<Vec<Bands<T>>> {
    prices.validate_not_empty()?;
    rolling_with_state(prices.len(), period, previous_mcginley_dynamic, |range, previous| {
        let bands = single::mcginley_dynamic_bands(
            &prices[range],
            deviation_model,
            constant_multiplier,
            previous,
        )?;
        Ok((bands, bands.middle))
    })
}

/// Rolling Ichimoku cloud over windows as long as the longest of the three periods.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if a
/// period is zero.
pub fn ichimoku_cloud<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
) -> Result<Vec<IchimokuCloud<T>>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    validate_period(conversion_period)?;
    validate_period(base_period)?;
    validate_period(span_b_period)?;
    let window = conversion_period.max(base_period).max(span_b_period);
    rolling_indexed(highs.len(), window, |range| {
        single::ichimoku_cloud(
            &highs[range.clone()],
            &lows[range.clone()],
            &close[range],
            conversion_period,
            base_period,
            span_b_period,
        )
    })
}

/// Rolling Donchian channels.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `highs` and `lows` differ in length,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn donchian_channels<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    period: usize,
) -> Result<Vec<Bands<T>>> {
    validate_aligned(("highs", highs), &[("lows", lows)])?;
    rolling_indexed(highs.len(), period, |range| {
        single::donchian_channels(&highs[range.clone()], &lows[range])
    })
}

/// Rolling Keltner channel.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn keltner_channel<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    model: ConstantModelType,
    atr_model: ConstantModelType,
    constant_multiplier: T,
    period: usize,
) -> Result<Vec<Bands<T>>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    rolling_indexed(highs.len(), period, |range| {
        single::keltner_channel(
            &highs[range.clone()],
            &lows[range.clone()],
            &close[range],
            model,
            atr_model,
            constant_multiplier,
        )
    })
}

/// Rolling Supertrend.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn supertrend<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    model: ConstantModelType,
    constant_multiplier: T,
    period: usize,
) -> Result<Vec<T>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    rolling_indexed(highs.len(), period, |range| {
        single::supertrend(
            &highs[range.clone()],
            &lows[range.clone()],
            &close[range],
            model,
            constant_multiplier,
        )
    })
}
