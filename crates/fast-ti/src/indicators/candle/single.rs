//! Single-window candle indicators.

use crate::chained;
use crate::error::Result;
use crate::indicators::candle::IchimokuCloud;
use crate::indicators::other::single::average_true_range;
use crate::indicators::Bands;
use crate::models::{central_tendency, deviation, ConstantModelType, DeviationModel};
use crate::traits::{validate_aligned, validate_period, SeriesElement, ValidatedInput};
use crate::utils::{highest, lowest};

fn envelope<T: SeriesElement>(middle: T, difference: T) -> Bands<T> {
    let offset = middle * (difference / T::hundred());
    Bands::new(middle - offset, middle, middle + offset)
}

fn band<T: SeriesElement>(middle: T, spread: T) -> Bands<T> {
    Bands::new(middle - spread, middle, middle + spread)
}

/// Envelope of `difference` percent either side of the window's central value.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::candle::single::moving_constant_envelopes;
/// use fast_ti::models::ConstantModelType;
///
/// let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
/// let e = moving_constant_envelopes(&prices, ConstantModelType::ExponentialMovingAverage, 3.0)
///     .unwrap();
/// assert!((e.middle - 100.28924170616115).abs() < 1e-9);
/// assert!((e.lower - 97.28056445497631).abs() < 1e-9);
/// ```
pub fn moving_constant_envelopes<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    difference: T,
) -> Result<Bands<T>> {
    Ok(envelope(central_tendency(prices, model)?, difference))
}

/// Envelope of `difference` percent either side of the McGinley Dynamic.
///
/// The McGinley Dynamic is stepped from `previous_mcginley_dynamic` with the
/// window length as its period; zero starts it at the last price.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn mcginley_dynamic_envelopes<T: SeriesElement>(
    prices: &[T],
    difference: T,
    previous_mcginley_dynamic: T,
) -> Result<Bands<T>> {
    prices.validate_not_empty()?;
    let middle =
        chained::mcginley_dynamic(prices[prices.len() - 1], previous_mcginley_dynamic, prices.len())?;
    Ok(envelope(middle, difference))
}

/// Bands `constant_multiplier` deviations either side of the window's central value.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn moving_constant_bands<T: SeriesElement>(
    prices: &[T],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    constant_multiplier: T,
) -> Result<Bands<T>> {
    let middle = central_tendency(prices, model)?;
    let spread = constant_multiplier * deviation(prices, deviation_model)?;
    Ok(band(middle, spread))
}

/// Bands `constant_multiplier` deviations either side of the McGinley Dynamic.
///
/// The deviation is the window's own (about its own centre), not about the
/// McGinley Dynamic.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn mcginley_dynamic_bands<T: SeriesElement>(
    prices: &[T],
    deviation_model: DeviationModel,
    constant_multiplier: T,
    previous_mcginley_dynamic: T,
) -> Result<Bands<T>> {
    prices.validate_not_empty()?;
    let middle =
        chained::mcginley_dynamic(prices[prices.len() - 1], previous_mcginley_dynamic, prices.len())?;
    let spread = constant_multiplier * deviation(prices, deviation_model)?;
    Ok(band(middle, spread))
}

fn midpoint<T: SeriesElement>(highs: &[T], lows: &[T]) -> T {
    (highest(highs) + lowest(lows)) / T::two()
}

/// Ichimoku cloud of the latest bars.
///
/// Each line is the midpoint of the highest high and lowest low over the last
/// `conversion_period`, `base_period` and `span_b_period` bars; span A is the
/// mean of the conversion and base lines and the displaced close is the close
/// `base_period` bars before the end.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, `Error::InvalidPeriod` if a period is
/// zero, or `Error::InsufficientData` if a period exceeds the number of bars.
pub fn ichimoku_cloud<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
) -> Result<IchimokuCloud<T>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    validate_period(conversion_period)?;
    validate_period(base_period)?;
    validate_period(span_b_period)?;
    let longest = conversion_period.max(base_period).max(span_b_period);
    highs.validate_min_length(longest, "ichimoku cloud")?;

    let len = highs.len();
    let tail = |period: usize| midpoint(&highs[len - period..], &lows[len - period..]);
    let conversion = tail(conversion_period);
    let base = tail(base_period);
    Ok(IchimokuCloud {
        span_a: (conversion + base) / T::two(),
        span_b: tail(span_b_period),
        base,
        conversion,
        displaced_close: close[len - base_period],
    })
}

/// Donchian channels: lowest low, highest high and their midpoint.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `highs` and `lows` differ in length, or
/// `Error::EmptyInput` if they are empty.
pub fn donchian_channels<T: SeriesElement>(highs: &[T], lows: &[T]) -> Result<Bands<T>> {
    validate_aligned(("highs", highs), &[("lows", lows)])?;
    let upper = highest(highs);
    let lower = lowest(lows);
    Ok(Bands::new(lower, (upper + lower) / T::two(), upper))
}

/// Keltner channel.
///
/// ```text
/// middle = model((high + low + close) / 3)
/// bands  = middle ± constant_multiplier · ATR(atr_model)
/// ```
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn keltner_channel<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    model: ConstantModelType,
    atr_model: ConstantModelType,
    constant_multiplier: T,
) -> Result<Bands<T>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    let three = T::from_usize(3)?;
    let typical: Vec<T> = highs
        .iter()
        .zip(lows)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + c) / three)
        .collect();
    let middle = central_tendency(&typical, model)?;
    let spread = constant_multiplier * average_true_range(close, highs, lows, atr_model)?;
    Ok(band(middle, spread))
}

/// Supertrend.
///
/// Bands are `constant_multiplier · ATR(model)` either side of the midpoint of
/// the highest high and lowest low. Returns the lower band while the last close
/// is above the upper band, the upper band otherwise.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn supertrend<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    model: ConstantModelType,
    constant_multiplier: T,
) -> Result<T> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    let spread = constant_multiplier * average_true_range(close, highs, lows, model)?;
    let bands = band(midpoint(highs, lows), spread);
    if close[close.len() - 1] > bands.upper {
        Ok(bands.lower)
    } else {
        Ok(bands.upper)
    }
}
