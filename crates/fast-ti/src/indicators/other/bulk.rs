//! Series forms of the other indicators.

use crate::error::Result;
use crate::indicators::other::{single, Positivity, ReturnOnInvestment};
use crate::kernels::window::{rolling, rolling_indexed};
use crate::models::{central_tendency, ConstantModelType};
use crate::traits::{validate_aligned, SeriesElement, ValidatedInput};

/// Return on investment between every pair of consecutive prices (`L - 1` values).
///
/// The final value of each step is reinvested in the next, so the last output
/// is the result of holding `investment` over the whole series.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `prices` is empty.
pub fn return_on_investment<T: SeriesElement>(
    prices: &[T],
    investment: T,
) -> Result<Vec<ReturnOnInvestment<T>>> {
    prices.validate_not_empty()?;
    let mut invested = investment;
    Ok(prices
        .windows(2)
        .map(|pair| {
            let roi = single::return_on_investment(pair[0], pair[1], invested);
            invested = roi.final_value;
            roi
        })
        .collect())
}

/// True range of every bar.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn true_range<T: SeriesElement>(close: &[T], high: &[T], low: &[T]) -> Result<Vec<T>> {
    validate_aligned(("close", close), &[("high", high), ("low", low)])?;
    Ok(close
        .iter()
        .zip(high)
        .zip(low)
        .map(|((&c, &h), &l)| single::true_range(c, h, l))
        .collect())
}

/// Rolling average true range.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `period` is zero.
pub fn average_true_range<T: SeriesElement>(
    close: &[T],
    high: &[T],
    low: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    let ranges = true_range(close, high, low)?;
    rolling(&ranges, period, |window| central_tendency(window, model))
}

/// Internal bar strength of every bar.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn internal_bar_strength<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<T>> {
    validate_aligned(("high", high), &[("low", low), ("close", close)])?;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| single::internal_bar_strength(h, l, c))
        .collect())
}

/// Positivity indicator.
///
/// For every bar the positivity is the gap between the open and the previous
/// close, in percent of the previous close. Each output pairs the positivity at
/// the end of a window of `signal_period` bars with the central value of the
/// window's positivity.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InvalidPeriod` if
/// `signal_period` is zero.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::other::bulk::positivity_indicator;
/// use fast_ti::models::ConstantModelType;
///
/// let open = [101.0_f64, 99.0, 102.0];
/// let previous_close = [100.0_f64, 100.0, 100.0];
/// let out = positivity_indicator(&open, &previous_close, 2, ConstantModelType::SimpleMovingAverage)
///     .unwrap();
/// assert_eq!(out.len(), 2);
/// assert!((out[1].positivity - 2.0).abs() < 1e-12);
/// assert!((out[1].signal - 0.5).abs() < 1e-12);
/// ```
pub fn positivity_indicator<T: SeriesElement>(
    open: &[T],
    previous_close: &[T],
    signal_period: usize,
    model: ConstantModelType,
) -> Result<Vec<Positivity<T>>> {
    validate_aligned(("open", open), &[("previous_close", previous_close)])?;
    let hundred = T::hundred();
    let positivity: Vec<T> = open
        .iter()
        .zip(previous_close)
        .map(|(&o, &pc)| hundred * (o - pc) / pc)
        .collect();
    rolling_indexed(positivity.len(), signal_period, |range| {
        Ok(Positivity {
            positivity: positivity[range.end - 1],
            signal: central_tendency(&positivity[range], model)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::approx_eq;

    // ==================== ROI Tests ====================

    #[test]
    fn test_bulk_return_on_investment_chains() {
        let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
        let out = return_on_investment(&prices, 1000.0).unwrap();
        assert_eq!(out.len(), 4);
        assert!(approx_eq(out[1].final_value, 999.203_663_149_512_2, 1e-9));
        assert!(approx_eq(out[1].percent_return, -0.149_209_191_286_193_53, 1e-9));
        assert!(approx_eq(out[3].final_value, 997.511_447_342_225_7, 1e-9));
        assert!(approx_eq(out[3].percent_return, 0.019_962_072_063_073_17, 1e-9));
    }

    // ==================== True Range Tests ====================

    #[test]
    fn test_bulk_true_range() {
        let close = [100.46_f64, 100.53, 100.38];
        let high = [101.12_f64, 101.3, 100.11];
        let low = [100.29_f64, 100.87, 99.94];
        let tr = true_range(&close, &high, &low).unwrap();
        assert!(approx_eq(tr[0], 0.83, 1e-9));
        assert!(approx_eq(tr[1], 0.77, 1e-9));
        assert!(approx_eq(tr[2], 0.44, 1e-9));
    }

    #[test]
    fn test_bulk_average_true_range() {
        let close = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
        let high = [101.12_f64, 101.3, 100.11, 100.55, 100.43];
        let low = [100.29_f64, 100.87, 99.94, 99.86, 99.91];
        let atr =
            average_true_range(&close, &high, &low, ConstantModelType::SimpleMovingAverage, 3)
                .unwrap();
        let expected = [0.68, 0.633_333_333_333_330_5, 0.55];
        assert_eq!(atr.len(), 3);
        for (a, e) in atr.iter().zip(expected) {
            assert!(approx_eq(*a, e, 1e-9));
        }
    }

    // ==================== Bar Strength Tests ====================

    #[test]
    fn test_bulk_internal_bar_strength() {
        let close = [100.55_f64, 99.01, 100.43, 101.0, 101.76];
        let high = [102.32_f64, 100.69, 100.83, 101.73, 102.01];
        let low = [100.14_f64, 98.98, 99.07, 100.1, 99.96];
        let ibs = internal_bar_strength(&high, &low, &close).unwrap();
        let expected = [
            0.188_073_394_495_411_9,
            0.017_543_859_649_123_535,
            0.772_727_272_727_278_3,
            0.552_147_239_263_803_9,
            0.878_048_780_487_805_5,
        ];
        for (a, e) in ibs.iter().zip(expected) {
            assert!(approx_eq(*a, e, 1e-9));
        }
    }

    // ==================== Positivity Tests ====================

    #[test]
    fn test_positivity_indicator() {
        let open = [5278.24_f64, 5314.48, 5357.8, 5343.81, 5341.22, 5353.0, 5409.13];
        let previous_close = [5283.4_f64, 5291.34, 5354.03, 5352.96, 5346.99, 5360.79, 5375.32];
        let out =
            positivity_indicator(&open, &previous_close, 5, ConstantModelType::SimpleMovingAverage)
                .unwrap();
        assert_eq!(out.len(), 3);
        assert!(approx_eq(out[0].positivity, -0.107_911_179_934_870_43, 1e-9));
        assert!(approx_eq(out[0].signal, 0.026_244_711_276_039_178, 1e-9));
        assert!(approx_eq(out[2].positivity, 0.628_985_809_216_947_1, 1e-9));
        assert!(approx_eq(out[2].signal, 0.055_048_201_970_255_53, 1e-9));
    }

    #[test]
    fn test_positivity_indicator_mismatch() {
        let result = positivity_indicator(
            &[1.0_f64, 2.0],
            &[1.0],
            1,
            ConstantModelType::SimpleMovingAverage,
        );
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_empty_prices() {
        let empty: [f64; 0] = [];
        assert_eq!(return_on_investment(&empty, 1000.0), Err(Error::EmptyInput));
        assert!(return_on_investment(&[1.0_f64], 1000.0).unwrap().is_empty());
    }
}
