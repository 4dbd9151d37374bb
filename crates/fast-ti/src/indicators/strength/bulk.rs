//! Series forms of the strength indicators.

use crate::chained;
use crate::error::Result;
use crate::indicators::strength::single;
use crate::kernels::window::rolling_indexed;
use crate::models::ConstantModelType;
use crate::traits::{validate_aligned, SeriesElement};

/// Accumulation/Distribution line chained over every bar (`L` values).
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn accumulation_distribution<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    previous: T,
) -> Result<Vec<T>> {
    validate_aligned(
        ("high", high),
        &[("low", low), ("close", close), ("volume", volume)],
    )?;
    let mut ad = previous;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .zip(volume)
        .map(|(((&h, &l), &c), &v)| {
            ad = chained::accumulation_distribution(h, l, c, v, ad);
            ad
        })
        .collect())
}

/// Chains a volume index over the series, stepping only on the bars `advance`
/// accepts and repeating the previous value otherwise.
fn volume_index_series<T, F>(
    close: &[T],
    volume: &[T],
    previous: T,
    advance: F,
) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: Fn(T, T) -> bool,
{
    validate_aligned(("close", close), &[("volume", volume)])?;
    let mut index = previous;
    Ok(close
        .windows(2)
        .zip(volume.windows(2))
        .map(|(c, v)| {
            if advance(v[1], v[0]) {
                index = chained::volume_index(c[1], c[0], index);
            }
            index
        })
        .collect())
}

/// Positive Volume Index (`L - 1` values): moves only on bars whose volume
/// rose from the previous bar.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn positive_volume_index<T: SeriesElement>(
    close: &[T],
    volume: &[T],
    previous: T,
) -> Result<Vec<T>> {
    volume_index_series(close, volume, previous, |current, prior| current > prior)
}

/// Negative Volume Index (`L - 1` values): moves only on bars whose volume
/// fell from the previous bar.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series are not aligned, or
/// `Error::EmptyInput` if they are empty.
pub fn negative_volume_index<T: SeriesElement>(
    close: &[T],
    volume: &[T],
    previous: T,
) -> Result<Vec<T>> {
    volume_index_series(close, volume, previous, |current, prior| current < prior)
}

/// Rolling Relative Vigor Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, `Error::InvalidPeriod` if `period`
/// is zero, or `Error::InsufficientData` if `period` is below four.
pub fn relative_vigor_index<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    model: ConstantModelType,
    period: usize,
) -> Result<Vec<T>> {
    validate_aligned(
        ("open", open),
        &[("high", high), ("low", low), ("close", close)],
    )?;
    rolling_indexed(open.len(), period, |range| {
        single::relative_vigor_index(
            &open[range.clone()],
            &high[range.clone()],
            &low[range.clone()],
            &close[range],
            model,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    const CLOSE: [f64; 4] = [100.14, 98.98, 99.07, 100.1];
    const VOLUME: [f64; 4] = [1000.0, 1200.0, 1300.0, 1100.0];

    // ==================== Accumulation/Distribution Tests ====================

    #[test]
    fn test_bulk_accumulation_distribution() {
        let ad = accumulation_distribution(
            &[100.53_f64, 100.68],
            &[99.62, 99.97],
            &[100.01, 100.44],
            &[268.0, 319.0],
            0.0,
        )
        .unwrap();
        assert_eq!(ad.len(), 2);
        assert!(approx_eq(ad[0], -38.285_714_285_713_09, 1e-9));
        assert!(approx_eq(ad[1], 65.052_313_883_295_26, 1e-9));
    }

    // ==================== Volume Index Tests ====================

    #[test]
    fn test_positive_volume_index() {
        let pvi = positive_volume_index(&CLOSE, &VOLUME, 0.0).unwrap();
        assert_eq!(pvi.len(), 3);
        assert!(approx_eq(pvi[0], -0.011_449_598_682_475_618, EPSILON));
        assert!(approx_eq(pvi[1], -0.011_460_009_511_748_427, EPSILON));
        assert_eq!(pvi[2], pvi[1]);
    }

    #[test]
    fn test_negative_volume_index() {
        let nvi = negative_volume_index(&CLOSE, &VOLUME, 0.0).unwrap();
        assert_eq!(nvi[0], 0.0);
        assert_eq!(nvi[1], 0.0);
        assert!(approx_eq(nvi[2], 0.010_504_780_356_171_802, EPSILON));
    }

    #[test]
    fn test_volume_index_mismatch() {
        assert!(matches!(
            positive_volume_index(&CLOSE, &VOLUME[..3], 0.0),
            Err(Error::LengthMismatch { .. })
        ));
    }

    // ==================== Relative Vigor Index Tests ====================

    #[test]
    fn test_bulk_relative_vigor_index() {
        let open = [100.73_f64, 99.62, 99.82, 100.38, 100.97, 101.81];
        let high = [102.32_f64, 100.69, 100.83, 101.73, 102.01, 102.75];
        let low = [100.14_f64, 98.98, 99.07, 100.1, 99.96, 100.55];
        let close = [100.55_f64, 99.01, 100.43, 101.0, 101.76, 102.03];
        let model = ConstantModelType::SimpleMovingAverage;
        let rvi = relative_vigor_index(&open, &high, &low, &close, model, 6).unwrap();
        assert_eq!(rvi.len(), 1);
        assert!(approx_eq(rvi[0], 0.206_378_411_530_208_1, 1e-9));

        let shorter = relative_vigor_index(&open, &high, &low, &close, model, 4).unwrap();
        assert_eq!(shorter.len(), 3);
    }
}
