//! Single-step and single-window strength indicators.

use crate::chained;
use crate::error::Result;
use crate::models::{central_tendency, ConstantModelType};
use crate::traits::{validate_aligned, SeriesElement, ValidatedInput};

/// Minimum number of bars for one Relative Vigor Index value.
const VIGOR_TAPS: usize = 4;

/// One step of the Accumulation/Distribution line. See
/// [`chained::accumulation_distribution`].
#[inline]
#[must_use]
pub fn accumulation_distribution<T: SeriesElement>(
    high: T,
    low: T,
    close: T,
    volume: T,
    previous: T,
) -> T {
    chained::accumulation_distribution(high, low, close, volume, previous)
}

/// One step of a volume index. See [`chained::volume_index`].
#[inline]
#[must_use]
pub fn volume_index<T: SeriesElement>(close: T, previous_close: T, previous_index: T) -> T {
    chained::volume_index(close, previous_close, previous_index)
}

/// Symmetric 1-2-2-1 weighting of every four consecutive values.
fn vigor_weighted<T: SeriesElement>(values: &[T]) -> Result<Vec<T>> {
    let two = T::two();
    let six = T::from_usize(6)?;
    Ok(values
        .windows(VIGOR_TAPS)
        .map(|w| (w[0] + two * w[1] + two * w[2] + w[3]) / six)
        .collect())
}

/// Relative Vigor Index.
///
/// Compares the close-minus-open body of each bar with its high-minus-low
/// range, both smoothed with a 1-2-2-1 weighting over four bars, and returns
/// `model(bodies) / model(ranges)`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the bars are not aligned,
/// `Error::EmptyInput` if they are empty, or `Error::InsufficientData` for
/// fewer than four bars.
pub fn relative_vigor_index<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    model: ConstantModelType,
) -> Result<T> {
    validate_aligned(
        ("open", open),
        &[("high", high), ("low", low), ("close", close)],
    )?;
    open.validate_min_length(VIGOR_TAPS, "relative vigor index")?;

    let bodies: Vec<T> = close.iter().zip(open).map(|(&c, &o)| c - o).collect();
    let ranges: Vec<T> = high.iter().zip(low).map(|(&h, &l)| h - l).collect();
    let numerator = central_tendency(&vigor_weighted(&bodies)?, model)?;
    let denominator = central_tendency(&vigor_weighted(&ranges)?, model)?;
    Ok(numerator / denominator)
}
