//! Rolling moving averages.

use crate::chained;
use crate::error::Result;
use crate::indicators::moving_average::{single, MovingAverageType};
use crate::kernels::window::{rolling, rolling_with_state};
use crate::traits::{SeriesElement, ValidatedInput};

/// Moving average of every window of `period` prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
pub fn moving_average<T: SeriesElement>(
    prices: &[T],
    ma_type: MovingAverageType,
    period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling(prices, period, |window| single::moving_average(window, ma_type))
}

/// McGinley Dynamic chained across every window of `period` prices.
///
/// The first window's value is seeded from `previous` (zero starts the chain
/// at that window's last price); each later window uses the value before it.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty, or `Error::InvalidPeriod`
/// if `period` is zero.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::moving_average::bulk;
///
/// let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
/// let md = bulk::mcginley_dynamic(&prices, 0.0, 3).unwrap();
/// assert_eq!(md[0], 100.53);
/// assert_eq!(md.len(), 3);
/// ```
pub fn mcginley_dynamic<T: SeriesElement>(
    prices: &[T],
    previous: T,
    period: usize,
) -> Result<Vec<T>> {
    prices.validate_not_empty()?;
    rolling_with_state(prices.len(), period, previous, |range, previous| {
        let md = chained::mcginley_dynamic(prices[range.end - 1], previous, period)?;
        Ok((md, md))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    const PRICES: [f64; 5] = [100.2, 100.46, 100.53, 100.38, 100.19];

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq(*a, *e, EPSILON), "{a} != {e}");
        }
    }

    // ==================== Moving Average Tests ====================

    #[test]
    fn test_bulk_simple_moving_average() {
        let ma = moving_average(&PRICES, MovingAverageType::Simple, 3).unwrap();
        assert_all_close(
            &ma,
            &[100.396_666_666_666_66, 100.456_666_666_666_67, 100.366_666_666_666_67],
        );
    }

    #[test]
    fn test_bulk_matches_single_per_window() {
        for ma_type in [
            MovingAverageType::Simple,
            MovingAverageType::Smoothed,
            MovingAverageType::Exponential,
        ] {
            let bulk = moving_average(&PRICES, ma_type, 4).unwrap();
            for (i, value) in bulk.iter().enumerate() {
                let single = single::moving_average(&PRICES[i..i + 4], ma_type).unwrap();
                assert!(approx_eq(*value, single, EPSILON));
            }
        }
    }

    #[test]
    fn test_period_longer_than_data() {
        assert!(moving_average(&PRICES, MovingAverageType::Simple, 6)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_zero_period() {
        assert!(matches!(
            moving_average(&PRICES, MovingAverageType::Simple, 0),
            Err(Error::InvalidPeriod { .. })
        ));
    }

    // ==================== McGinley Dynamic Tests ====================

    #[test]
    fn test_bulk_mcginley_dynamic() {
        let md = mcginley_dynamic(&PRICES, 0.0, 3).unwrap();
        assert_all_close(&md, &[100.53, 100.479_700_465_117_69, 100.382_011_893_767_44]);
    }

    #[test]
    fn test_bulk_mcginley_dynamic_seeded() {
        let md = mcginley_dynamic(&PRICES, 100.53, 3).unwrap();
        assert!(approx_eq(md[0], 100.53, EPSILON));
    }
}
