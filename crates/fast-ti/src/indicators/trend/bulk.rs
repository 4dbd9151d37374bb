//! Series forms of the trend indicators.

use tracing::debug;

use crate::chained::{self, Position};
use crate::error::{Error, Result};
use crate::indicators::other::single::true_range;
use crate::indicators::trend::{single, AroonIndicator, DirectionalMovement};
use crate::kernels::rolling_extrema::{rolling_extreme_with_index, Extreme};
use crate::kernels::window::{rolling, rolling_len};
use crate::models::{central_tendency, ConstantModelType};
use crate::traits::{validate_aligned, validate_period, SeriesElement, ValidatedInput};

fn rolling_aroon<T: SeriesElement>(
    data: &[T],
    period: usize,
    extreme: Extreme,
) -> Result<Vec<T>> {
    data.validate_not_empty()?;
    validate_period(period)?;
    if period < 2 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "aroon needs a window of at least 2 values",
        });
    }
    rolling_extreme_with_index(data, period, extreme)?
        .into_iter()
        .enumerate()
        .map(|(start, (value, at))| {
            let index = (!value.is_nan()).then(|| at - start);
            single::aroon_from_index(index, period)
        })
        .collect()
}

/// Rolling Aroon up over windows of `period` highs.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `highs` is empty, or `Error::InvalidPeriod`
/// if `period` is below two.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::trend::bulk::aroon_up;
///
/// let highs = [101.26_f64, 102.57, 102.32, 100.69, 100.83, 101.73, 102.01];
/// let up = aroon_up(&highs, 4).unwrap();
/// assert_eq!(up.len(), 4);
/// assert_eq!(up[3], 100.0);
/// ```
pub fn aroon_up<T: SeriesElement>(highs: &[T], period: usize) -> Result<Vec<T>> {
    rolling_aroon(highs, period, Extreme::Max)
}

/// Rolling Aroon down over windows of `period` lows.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `lows` is empty, or `Error::InvalidPeriod`
/// if `period` is below two.
pub fn aroon_down<T: SeriesElement>(lows: &[T], period: usize) -> Result<Vec<T>> {
    rolling_aroon(lows, period, Extreme::Min)
}

/// Element-wise Aroon oscillator.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::EmptyInput` if they are empty.
pub fn aroon_oscillator<T: SeriesElement>(aroon_up: &[T], aroon_down: &[T]) -> Result<Vec<T>> {
    validate_aligned(("aroon_up", aroon_up), &[("aroon_down", aroon_down)])?;
    Ok(aroon_up
        .iter()
        .zip(aroon_down)
        .map(|(&up, &down)| single::aroon_oscillator(up, down))
        .collect())
}

/// Rolling Aroon up, down and oscillator.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `highs` and `lows` differ in length,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is below two.
pub fn aroon_indicator<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    period: usize,
) -> Result<Vec<AroonIndicator<T>>> {
    validate_aligned(("highs", highs), &[("lows", lows)])?;
    let ups = aroon_up(highs, period)?;
    let downs = aroon_down(lows, period)?;
    Ok(ups
        .into_iter()
        .zip(downs)
        .map(|(up, down)| AroonIndicator {
            up,
            down,
            oscillator: single::aroon_oscillator(up, down),
        })
        .collect())
}

/// Checks Parabolic SAR acceleration factors.
pub(crate) fn validate_acceleration<T: SeriesElement>(
    af_start: T,
    af_max: T,
    af_step: T,
) -> Result<()> {
    if af_start.is_nan() || af_start < T::zero() {
        return Err(Error::InvalidParameter {
            name: "af_start",
            reason: "acceleration factor must be non-negative",
        });
    }
    if af_step.is_nan() || af_step < T::zero() {
        return Err(Error::InvalidParameter {
            name: "af_step",
            reason: "acceleration factor step must be non-negative",
        });
    }
    if af_max.is_nan() || af_max < af_start {
        return Err(Error::InvalidParameter {
            name: "af_max",
            reason: "maximum acceleration factor must not be below the start",
        });
    }
    Ok(())
}

/// Parabolic SAR of every bar (`L` values).
///
/// The first bar's SAR is `previous_sar`, or the bar's low (long) / high
/// (short) when `previous_sar` is zero; its extreme point is the bar's high
/// (long) / low (short). On each following bar:
///
/// 1. a new extreme extends the extreme point and ramps the acceleration factor
///    by `af_step`, capped at `af_max`;
/// 2. the SAR steps towards the extreme point, bounded by the previous bar's
///    low (long) or high (short);
/// 3. if the bar's low (long) / high (short) crosses the SAR, the position
///    reverses, the SAR jumps to the old extreme point, the extreme point
///    becomes this bar's low/high and the factor resets to `af_start`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` for invalid acceleration factors,
/// `Error::LengthMismatch` if `highs` and `lows` differ in length, or
/// `Error::EmptyInput` if they are empty.
pub fn parabolic_time_price_system<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    af_start: T,
    af_max: T,
    af_step: T,
    start_position: Position,
    previous_sar: T,
) -> Result<Vec<T>> {
    validate_aligned(("highs", highs), &[("lows", lows)])?;
    validate_acceleration(af_start, af_max, af_step)?;

    let mut position = start_position;
    let (mut sar, mut extreme_point) = match position {
        Position::Long => (lows[0], highs[0]),
        Position::Short => (highs[0], lows[0]),
    };
    if previous_sar != T::zero() {
        sar = previous_sar;
    }
    let mut acceleration_factor = af_start;

    let mut output = Vec::with_capacity(highs.len());
    output.push(sar);

    for i in 1..highs.len() {
        let extended = match position {
            Position::Long => highs[i] > extreme_point,
            Position::Short => lows[i] < extreme_point,
        };
        if extended {
            extreme_point = match position {
                Position::Long => highs[i],
                Position::Short => lows[i],
            };
            acceleration_factor = (acceleration_factor + af_step).min(af_max);
        }

        let bound = match position {
            Position::Long => lows[i - 1],
            Position::Short => highs[i - 1],
        };
        sar = chained::parabolic_sar_step(position, sar, extreme_point, acceleration_factor, bound);

        let crossed = match position {
            Position::Long => lows[i] < sar,
            Position::Short => highs[i] > sar,
        };
        if crossed {
            sar = extreme_point;
            position = position.reversed();
            extreme_point = match position {
                Position::Long => highs[i],
                Position::Short => lows[i],
            };
            acceleration_factor = af_start;
            debug!(index = i, ?position, "parabolic sar stop and reverse");
        }

        output.push(sar);
    }

    Ok(output)
}

/// Directional movement system.
///
/// For every bar `+DM` is the rise in the high when it exceeds the fall in the
/// low (and is positive), `-DM` the mirror image; the true range is measured
/// against the bar's own close. For each bar `t >= period`:
///
/// ```text
/// ±DI  = 100 · model(±DM over the last period bars) / model(TR over the same bars)
/// DX   = 100 · |+DI - -DI| / (+DI + -DI)
/// ADX  = model(DX over period values)
/// ADXR = (ADX_t + ADX_{t-period+1}) / 2
/// ```
///
/// Returns `L - 3·period + 2` outputs; each carries the DI values aligned with
/// its latest ADX.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, `Error::InvalidPeriod` if `period`
/// is zero, or `Error::InsufficientData` for fewer than `3 · period` bars.
pub fn directional_movement_system<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    period: usize,
    model: ConstantModelType,
) -> Result<Vec<DirectionalMovement<T>>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;
    validate_period(period)?;
    highs.validate_min_length(period.saturating_mul(3), "directional movement system")?;

    let zero = T::zero();
    let hundred = T::hundred();
    let len = highs.len();

    let (positive_dm, negative_dm): (Vec<T>, Vec<T>) = (1..len)
        .map(|i| {
            let up = highs[i] - highs[i - 1];
            let down = lows[i - 1] - lows[i];
            let plus = if up > down && up > zero { up } else { zero };
            let minus = if down > up && down > zero { down } else { zero };
            (plus, minus)
        })
        .unzip();
    let ranges: Vec<T> = close
        .iter()
        .zip(highs)
        .zip(lows)
        .map(|((&c, &h), &l)| true_range(c, h, l))
        .collect();

    // DM index j belongs to bar j + 1
    let mut positive_di = Vec::with_capacity(len - period);
    let mut negative_di = Vec::with_capacity(len - period);
    for t in period..len {
        let average_range = central_tendency(&ranges[t + 1 - period..=t], model)?;
        positive_di.push(hundred * central_tendency(&positive_dm[t - period..t], model)? / average_range);
        negative_di.push(hundred * central_tendency(&negative_dm[t - period..t], model)? / average_range);
    }

    let dx: Vec<T> = positive_di
        .iter()
        .zip(&negative_di)
        .map(|(&plus, &minus)| hundred * (plus - minus).abs() / (plus + minus))
        .collect();
    let adx = rolling(&dx, period, |w| central_tendency(w, model))?;

    let lag = period - 1;
    let two = T::two();
    Ok((0..rolling_len(adx.len(), period))
        .map(|k| DirectionalMovement {
            positive_di: positive_di[k + 2 * lag],
            negative_di: negative_di[k + 2 * lag],
            adx: adx[k + lag],
            adxr: (adx[k + lag] + adx[k]) / two,
        })
        .collect())
}

/// Volume-price trend chained over the series (`L - 1` values).
///
/// `volumes[i - 1]` is the volume traded on the move from `prices[i - 1]` to
/// `prices[i]`, so there must be exactly one volume fewer than prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or
/// `Error::LengthMismatch` if `volumes.len() != prices.len() - 1`.
pub fn volume_price_trend<T: SeriesElement>(
    prices: &[T],
    volumes: &[T],
    previous_volume_price_trend: T,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    if volumes.len() != prices.len() - 1 {
        return Err(Error::length_mismatch(
            "volumes",
            volumes.len(),
            "price moves",
            prices.len() - 1,
        ));
    }
    let mut vpt = previous_volume_price_trend;
    Ok(prices
        .windows(2)
        .zip(volumes)
        .map(|(pair, &volume)| {
            vpt = chained::volume_price_trend(pair[1], pair[0], volume, vpt);
            vpt
        })
        .collect())
}

/// Rolling True Strength Index over windows of `first_period + second_period` prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if either period is zero.
pub fn true_strength_index<T: SeriesElement>(
    prices: &[T],
    first_model: ConstantModelType,
    first_period: usize,
    second_model: ConstantModelType,
    second_period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    validate_period(first_period)?;
    validate_period(second_period)?;
    rolling(prices, first_period + second_period, |window| {
        single::true_strength_index(window, first_model, first_period, second_model)
    })
}
