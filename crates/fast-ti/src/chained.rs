//! State-threaded recurrences.
//!
//! Each function here is a single update step: it consumes the previous output
//! of the indicator plus the current bar and returns the new output. The caller
//! owns the state between calls; the crate never stores it. A previous value of
//! `0.0` means "no prior state" and selects the bootstrap rule documented on
//! each function.
//!
//! Bulk variants in [`crate::indicators`] chain these steps in index order,
//! feeding each output back in as the next step's previous value.
//!
//! # Example
//!
//! ```
//! use fast_ti::chained::mcginley_dynamic;
//!
//! // No previous value: the McGinley Dynamic starts at the latest price.
//! let first = mcginley_dynamic(100.19_f64, 0.0, 5).unwrap();
//! assert_eq!(first, 100.19);
//!
//! let next = mcginley_dynamic(100.32_f64, first, 5).unwrap();
//! assert!(next > first && next < 100.32);
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Side of the market a stop-and-reverse system is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Long: the stop trails below price and is bounded by lows.
    Long,
    /// Short: the stop trails above price and is bounded by highs.
    Short,
}

impl Position {
    /// The position taken after a stop-and-reverse.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Long => Self::Short,
            Self::Short => Self::Long,
        }
    }
}

/// One step of the McGinley Dynamic.
///
/// ```text
/// md = previous + (price - previous) / (period · (price / previous)^4)
/// ```
///
/// When `previous` is zero the result is `latest_price`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn mcginley_dynamic<T: SeriesElement>(latest_price: T, previous: T, period: usize) -> Result<T> {
    validate_period(period)?;
    if previous == T::zero() {
        return Ok(latest_price);
    }
    let ratio = latest_price / previous;
    Ok(previous + (latest_price - previous) / (T::from_usize(period)? * ratio.powi(4)))
}

/// One step of On-Balance Volume.
///
/// Adds the volume on an up move, subtracts it on a down move and repeats the
/// previous value when the price is unchanged.
#[inline]
#[must_use]
pub fn on_balance_volume<T: SeriesElement>(
    current_price: T,
    previous_price: T,
    current_volume: T,
    previous_obv: T,
) -> T {
    if current_price > previous_price {
        previous_obv + current_volume
    } else if current_price < previous_price {
        previous_obv - current_volume
    } else {
        previous_obv
    }
}

/// One step of a volume index (the shared recurrence of the Positive and
/// Negative Volume Index).
///
/// ```text
/// change = (close - previous_close) / previous_close
/// index  = previous_index · (1 + change)      or change + change² when previous_index is 0
/// ```
#[inline]
#[must_use]
pub fn volume_index<T: SeriesElement>(current_close: T, previous_close: T, previous_index: T) -> T {
    let change = (current_close - previous_close) / previous_close;
    if previous_index == T::zero() {
        change + change * change
    } else {
        previous_index * (T::one() + change)
    }
}

/// One step of the Accumulation/Distribution line.
///
/// ```text
/// ad = previous + volume · ((close - low) - (high - close)) / (high - low)
/// ```
#[inline]
#[must_use]
pub fn accumulation_distribution<T: SeriesElement>(
    high: T,
    low: T,
    close: T,
    volume: T,
    previous: T,
) -> T {
    let money_flow_multiplier = ((close - low) - (high - close)) / (high - low);
    previous + volume * money_flow_multiplier
}

/// One step of the Volume-Price Trend.
///
/// ```text
/// vpt = previous_vpt + volume · (price - previous_price) / previous_price
/// ```
#[inline]
#[must_use]
pub fn volume_price_trend<T: SeriesElement>(
    current_price: T,
    previous_price: T,
    volume: T,
    previous_vpt: T,
) -> T {
    previous_vpt + volume * ((current_price - previous_price) / previous_price)
}

/// One step of the Parabolic SAR for a long position.
///
/// The stop accelerates towards the extreme point but never rises above `low`.
#[inline]
#[must_use]
pub fn long_parabolic_sar<T: SeriesElement>(
    previous_sar: T,
    extreme_point: T,
    acceleration_factor: T,
    low: T,
) -> T {
    (previous_sar + acceleration_factor * (extreme_point - previous_sar)).min(low)
}

/// One step of the Parabolic SAR for a short position.
///
/// The stop accelerates towards the extreme point but never falls below `high`.
#[inline]
#[must_use]
pub fn short_parabolic_sar<T: SeriesElement>(
    previous_sar: T,
    extreme_point: T,
    acceleration_factor: T,
    high: T,
) -> T {
    (previous_sar + acceleration_factor * (extreme_point - previous_sar)).max(high)
}

/// One Parabolic SAR step for either side; `bound` is the low (long) or high (short).
#[inline]
#[must_use]
pub fn parabolic_sar_step<T: SeriesElement>(
    position: Position,
    previous_sar: T,
    extreme_point: T,
    acceleration_factor: T,
    bound: T,
) -> T {
    match position {
        Position::Long => long_parabolic_sar(previous_sar, extreme_point, acceleration_factor, bound),
        Position::Short => short_parabolic_sar(previous_sar, extreme_point, acceleration_factor, bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    // ==================== McGinley Dynamic Tests ====================

    #[test]
    fn test_mcginley_bootstrap_returns_price() {
        assert_eq!(mcginley_dynamic(100.19_f64, 0.0, 5).unwrap(), 100.19);
    }

    #[test]
    fn test_mcginley_step() {
        let md = mcginley_dynamic(100.38_f64, 100.53, 3).unwrap();
        assert!(approx_eq(md, 100.479_700_465_117_69, EPSILON));
    }

    #[test]
    fn test_mcginley_zero_period() {
        assert!(matches!(
            mcginley_dynamic(1.0_f64, 1.0, 0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    // ==================== Volume Recurrence Tests ====================

    #[test]
    fn test_on_balance_volume_directions() {
        assert_eq!(on_balance_volume(120.0_f64, 100.0, 1500.0, 0.0), 1500.0);
        assert_eq!(on_balance_volume(90.0_f64, 100.0, 1500.0, 200.0), -1300.0);
        assert_eq!(on_balance_volume(100.0_f64, 100.0, 1500.0, 200.0), 200.0);
    }

    #[test]
    fn test_volume_index_bootstrap_and_step() {
        let first = volume_index(100.44_f64, 100.01, 0.0);
        assert!(approx_eq(first, 0.004_318_056_345_550_251, EPSILON));

        let next = volume_index(110.0_f64, 100.0, 2.0);
        assert!(approx_eq(next, 2.2, EPSILON));
    }

    #[test]
    fn test_accumulation_distribution_step() {
        let ad = accumulation_distribution(100.53_f64, 99.62, 100.01, 268.0, 0.0);
        assert!(approx_eq(ad, -38.285_714_285_713_09, 1e-9));
    }

    #[test]
    fn test_volume_price_trend_step() {
        let vpt = volume_price_trend(99.01_f64, 100.55, 743.0, 0.0);
        assert!(approx_eq(vpt, -11.379_612_133_266_974, EPSILON));
    }

    // ==================== Parabolic SAR Tests ====================

    #[test]
    fn test_long_parabolic_sar() {
        assert!(approx_eq(long_parabolic_sar(100.0_f64, 110.0, 0.06, 105.0), 100.6, EPSILON));
        // Bounded by the low
        assert_eq!(long_parabolic_sar(100.0_f64, 110.0, 0.5, 101.0), 101.0);
    }

    #[test]
    fn test_short_parabolic_sar() {
        assert!(approx_eq(short_parabolic_sar(100.0_f64, 90.0, 0.04, 95.0), 99.6, EPSILON));
        assert_eq!(short_parabolic_sar(100.0_f64, 90.0, 0.5, 99.0), 99.0);
    }

    #[test]
    fn test_parabolic_sar_step_dispatch() {
        assert_eq!(
            parabolic_sar_step(Position::Long, 100.0_f64, 110.0, 0.06, 105.0),
            long_parabolic_sar(100.0, 110.0, 0.06, 105.0)
        );
        assert_eq!(Position::Long.reversed(), Position::Short);
        assert_eq!(Position::Short.reversed(), Position::Long);
    }
}
