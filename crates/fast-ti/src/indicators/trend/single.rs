//! Single-window and single-step trend indicators.

use crate::chained;
use crate::error::Result;
use crate::indicators::trend::AroonIndicator;
use crate::kernels::window::rolling;
use crate::models::{central_tendency, ConstantModelType};
use crate::traits::{validate_aligned, validate_sub_period, SeriesElement, ValidatedInput};
use crate::utils::{last_index_of_highest, last_index_of_lowest, price_changes};

/// Aroon value of a window of `window_len` values whose extreme sits at
/// `index` (relative to the window start).
///
/// ```text
/// period  = window_len - 1
/// since   = period - index
/// aroon   = 100 · (period - since) / period
/// ```
pub(crate) fn aroon_from_index<T: SeriesElement>(
    index: Option<usize>,
    window_len: usize,
) -> Result<T> {
    let Some(index) = index else {
        return Ok(T::nan());
    };
    let period = window_len - 1;
    let since = period - index;
    let period_t = T::from_usize(period)?;
    Ok(T::hundred() * ((period_t - T::from_usize(since)?) / period_t))
}

/// Aroon up: how recently the window made its high.
///
/// The window of `L` values gives an Aroon period of `L - 1`. Equal highs
/// resolve to the most recent one.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than two values.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::trend::single::aroon_up;
///
/// let highs = [101.26_f64, 102.57, 102.32, 100.69];
/// assert!((aroon_up(&highs).unwrap() - 33.333333333333336).abs() < 1e-9);
/// ```
pub fn aroon_up<T: SeriesElement>(highs: &[T]) -> Result<T> {
    highs.validate_min_length(2, "aroon up")?;
    aroon_from_index(last_index_of_highest(highs), highs.len())
}

/// Aroon down: how recently the window made its low.
///
/// # Errors
///
/// Returns `Error::InsufficientData` for fewer than two values.
pub fn aroon_down<T: SeriesElement>(lows: &[T]) -> Result<T> {
    lows.validate_min_length(2, "aroon down")?;
    aroon_from_index(last_index_of_lowest(lows), lows.len())
}

/// Aroon oscillator: `aroon_up - aroon_down`.
#[inline]
#[must_use]
pub fn aroon_oscillator<T: SeriesElement>(aroon_up: T, aroon_down: T) -> T {
    aroon_up - aroon_down
}

/// Aroon up, down and oscillator of one window.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `highs` and `lows` differ in length, or
/// `Error::InsufficientData` for fewer than two bars.
pub fn aroon_indicator<T: SeriesElement>(highs: &[T], lows: &[T]) -> Result<AroonIndicator<T>> {
    validate_aligned(("highs", highs), &[("lows", lows)])?;
    let up = aroon_up(highs)?;
    let down = aroon_down(lows)?;
    Ok(AroonIndicator {
        up,
        down,
        oscillator: aroon_oscillator(up, down),
    })
}

/// One Parabolic SAR step for a long position. See [`chained::long_parabolic_sar`].
#[inline]
#[must_use]
pub fn long_parabolic_time_price_system<T: SeriesElement>(
    previous_sar: T,
    extreme_point: T,
    acceleration_factor: T,
    low: T,
) -> T {
    chained::long_parabolic_sar(previous_sar, extreme_point, acceleration_factor, low)
}

/// One Parabolic SAR step for a short position. See [`chained::short_parabolic_sar`].
#[inline]
#[must_use]
pub fn short_parabolic_time_price_system<T: SeriesElement>(
    previous_sar: T,
    extreme_point: T,
    acceleration_factor: T,
    high: T,
) -> T {
    chained::short_parabolic_sar(previous_sar, extreme_point, acceleration_factor, high)
}

/// One step of the Volume-Price Trend. See [`chained::volume_price_trend`].
#[inline]
#[must_use]
pub fn volume_price_trend<T: SeriesElement>(
    current_price: T,
    previous_price: T,
    volume: T,
    previous_volume_price_trend: T,
) -> T {
    chained::volume_price_trend(current_price, previous_price, volume, previous_volume_price_trend)
}

/// True Strength Index.
///
/// The price changes and their magnitudes are each smoothed with
/// `first_model` over rolling windows of `first_period`; the result is
/// `second_model(smoothed) / second_model(smoothed magnitudes)`, or `0` when
/// the denominator is zero (a flat window).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `first_period` is zero or longer than the number of price changes.
pub fn true_strength_index<T: SeriesElement>(
    prices: &[T],
    first_model: ConstantModelType,
    first_period: usize,
    second_model: ConstantModelType,
) -> Result<T> {
    prices.validate_not_empty()?;
    let momentum = price_changes(prices);
    validate_sub_period(first_period, momentum.len())?;
    let magnitude: Vec<T> = momentum.iter().map(|m| m.abs()).collect();

    let smoothed = rolling(&momentum, first_period, |w| central_tendency(w, first_model))?;
    let smoothed_magnitude =
        rolling(&magnitude, first_period, |w| central_tendency(w, first_model))?;

    let denominator = central_tendency(&smoothed_magnitude, second_model)?;
    if denominator == T::zero() {
        return Ok(T::zero());
    }
    Ok(central_tendency(&smoothed, second_model)? / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    const HIGHS: [f64; 4] = [101.26, 102.57, 102.32, 100.69];
    const LOWS: [f64; 4] = [100.08, 98.75, 100.14, 98.98];

    // ==================== Aroon Tests ====================

    #[test]
    fn test_aroon_up_and_down() {
        assert!(approx_eq(aroon_up(&HIGHS).unwrap(), 33.333_333_333_333_33, 1e-9));
        assert!(approx_eq(aroon_down(&LOWS).unwrap(), 33.333_333_333_333_33, 1e-9));
    }

    #[test]
    fn test_aroon_extreme_at_end_is_hundred() {
        assert_eq!(aroon_up(&[1.0_f64, 2.0, 3.0]).unwrap(), 100.0);
        assert_eq!(aroon_down(&[1.0_f64, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_aroon_ties_use_most_recent() {
        assert_eq!(aroon_up(&[3.0_f64, 1.0, 3.0]).unwrap(), 100.0);
    }

    #[test]
    fn test_aroon_needs_two_values() {
        assert!(matches!(
            aroon_up(&[1.0_f64]),
            Err(Error::InsufficientData { required: 2, .. })
        ));
    }

    #[test]
    fn test_aroon_indicator() {
        let out = aroon_indicator(&HIGHS, &LOWS).unwrap();
        assert!(approx_eq(out.up, 33.333_333_333_333_33, 1e-9));
        assert!(approx_eq(out.down, 33.333_333_333_333_33, 1e-9));
        assert!(approx_eq(out.oscillator, 0.0, EPSILON));
    }

    // ==================== Parabolic SAR Tests ====================

    #[test]
    fn test_parabolic_time_price_system_steps() {
        assert!(approx_eq(
            long_parabolic_time_price_system(100.0_f64, 110.0, 0.06, 105.0),
            100.6,
            EPSILON
        ));
        assert!(approx_eq(
            short_parabolic_time_price_system(100.0_f64, 90.0, 0.04, 95.0),
            99.6,
            EPSILON
        ));
    }

    // ==================== Volume-Price Trend Tests ====================

    #[test]
    fn test_volume_price_trend() {
        let vpt = volume_price_trend(99.01_f64, 100.55, 743.0, 0.0);
        assert!(approx_eq(vpt, -11.379_612_133_266_974, EPSILON));
    }

    // ==================== True Strength Index Tests ====================

    #[test]
    fn test_true_strength_index() {
        let prices = [100.14_f64, 98.98, 99.07, 100.1, 99.96, 99.56, 100.72, 101.16];
        let ema = ConstantModelType::ExponentialMovingAverage;
        let tsi = true_strength_index(&prices, ema, 5, ema).unwrap();
        assert!(approx_eq(tsi, 0.603_108_448_380_658_4, 1e-9));
    }

    #[test]
    fn test_true_strength_index_flat_is_zero() {
        let prices = [5.0_f64; 6];
        let sma = ConstantModelType::SimpleMovingAverage;
        assert_eq!(true_strength_index(&prices, sma, 3, sma).unwrap(), 0.0);
    }

    #[test]
    fn test_true_strength_index_period_too_long() {
        let prices = [1.0_f64, 2.0, 3.0];
        let sma = ConstantModelType::SimpleMovingAverage;
        assert!(matches!(
            true_strength_index(&prices, sma, 3, sma),
            Err(Error::InvalidPeriod { period: 3, .. })
        ));
    }
}
