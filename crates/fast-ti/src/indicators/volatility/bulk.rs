//! Series forms of the volatility indicators.

use tracing::debug;

use crate::chained::Position;
use crate::error::Result;
use crate::indicators::other::single::average_true_range;
use crate::indicators::volatility::single;
use crate::kernels::window::{rolling, rolling_with_state};
use crate::models::ConstantModelType;
use crate::traits::{validate_aligned, SeriesElement, ValidatedInput};
use crate::utils::{highest, lowest};

/// Rolling Ulcer Index over windows of `period` prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn ulcer_index<T: SeriesElement>(prices: &[T], period: usize) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling(prices, period, single::ulcer_index)
}

/// Volatility system stop of every window of `period` bars.
///
/// The average range constant is `ARC = constant_multiplier · ATR(window)`,
/// the ATR taken with `model`. The system starts long if the first window's
/// last close is above its first close, short otherwise; the significant
/// close (SIC) starts at the window's highest (long) or lowest (short) close
/// and the first stop is `SIC ∓ ARC`.
///
/// For every following window with last close `c`:
///
/// - long and `c` below the previous stop: go short, stop = `SIC + ARC`, SIC = `c`
/// - short and `c` above the previous stop: go long, stop = `SIC - ARC`, SIC = `c`
/// - otherwise: stop = `SIC ∓ ARC`, then SIC tracks the extreme close
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::volatility::bulk::volatility_system;
/// use fast_ti::models::ConstantModelType;
///
/// let highs = [100.83_f64, 100.91, 101.03, 101.27, 100.52];
/// let lows = [100.59_f64, 100.72, 100.84, 100.91, 99.85];
/// let close = [100.76_f64, 100.88, 100.96, 101.14, 100.01];
/// let stops = volatility_system(
///     &highs, &lows, &close, 3, 2.0, ConstantModelType::SimpleMovingAverage,
/// ).unwrap();
/// assert_eq!(stops.len(), 3);
/// // The last close falls through the long stop and the system reverses.
/// assert!(stops[2] > close[4]);
/// ```
pub fn volatility_system<T: SeriesElement>(
    highs: &[T],
    lows: &[T],
    close: &[T],
    period: usize,
    constant_multiplier: T,
    model: ConstantModelType,
) -> Result<Vec<T>> {
    validate_aligned(("highs", highs), &[("lows", lows), ("close", close)])?;

    // (position, significant close, previous stop); None before the first window
    let initial: Option<(Position, T, T)> = None;
    rolling_with_state(close.len(), period, initial, |range, state| {
        let window = &close[range.clone()];
        let arc = constant_multiplier
            * average_true_range(window, &highs[range.clone()], &lows[range.clone()], model)?;
        let last = window[window.len() - 1];

        let (position, significant_close, stop) = match state {
            None => {
                if last > window[0] {
                    let sic = highest(window);
                    (Position::Long, sic, sic - arc)
                } else {
                    let sic = lowest(window);
                    (Position::Short, sic, sic + arc)
                }
            }
            Some((Position::Long, sic, previous_stop)) if last < previous_stop => {
                debug!(index = range.end - 1, position = ?Position::Short, "volatility system reversal");
                (Position::Short, last, sic + arc)
            }
            Some((Position::Short, sic, previous_stop)) if last > previous_stop => {
                debug!(index = range.end - 1, position = ?Position::Long, "volatility system reversal");
                (Position::Long, last, sic - arc)
            }
            Some((Position::Long, sic, _)) => (Position::Long, sic.max(last), sic - arc),
            Some((Position::Short, sic, _)) => (Position::Short, sic.min(last), sic + arc),
        };
        Ok((stop, Some((position, significant_close, stop))))
    })
}
