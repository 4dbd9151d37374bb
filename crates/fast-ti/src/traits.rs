//! Core traits and input validation shared by every indicator.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so that every function in
//! the crate can be written once. [`ValidatedInput`] and the free
//! `validate_*` functions implement the precondition checks of the error
//! taxonomy: they run before any computation so a call either fully succeeds
//! or fails without side effects.
//!
//! # Example
//!
//! ```
//! use fast_ti::traits::{validate_equal_lengths, validate_period, SeriesElement};
//!
//! fn midpoint_sum<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> fast_ti::Result<T> {
//!     validate_period(period)?;
//!     validate_equal_lengths(("high", high), &[("low", low)])?;
//!     Ok(high
//!         .iter()
//!         .zip(low)
//!         .take(period)
//!         .fold(T::zero(), |acc, (&h, &l)| acc + (h + l) / T::two()))
//! }
//!
//! let total = midpoint_sum(&[3.0_f64, 5.0], &[1.0, 3.0], 2).unwrap();
//! assert!((total - 6.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price or volume series.
///
/// The trait requires `Float` arithmetic, `NumCast` conversions, and
/// `Send + Sync` so series can be handed to the batch processor.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Used for converting window lengths and counts into the element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// Used for multipliers and thresholds configured as `f64`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for every percentage-scaled oscillator.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100_u8).unwrap_or_else(Self::nan)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input series before indicator computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            Err(Error::InsufficientData {
                required: min_length,
                actual: self.len(),
                indicator,
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a period is usable as a window size.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates a short/long period pair.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is zero or the short period
/// is not strictly below the long one.
#[inline]
pub fn validate_short_long(short_period: usize, long_period: usize) -> Result<()> {
    validate_period(short_period)?;
    if short_period >= long_period {
        return Err(Error::InvalidPeriod {
            period: short_period,
            reason: "short period must be less than long period",
        });
    }
    Ok(())
}

/// Validates that a sub-period fits inside a window of `window_len` values.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `sub_period` is zero or longer than the window.
#[inline]
pub fn validate_sub_period(sub_period: usize, window_len: usize) -> Result<()> {
    validate_period(sub_period)?;
    if sub_period > window_len {
        return Err(Error::InvalidPeriod {
            period: sub_period,
            reason: "sub-period must not exceed the window length",
        });
    }
    Ok(())
}

/// Validates that every named series has the same length as the reference series.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming the first series whose length differs.
pub fn validate_equal_lengths<T: SeriesElement>(
    reference: (&str, &[T]),
    others: &[(&str, &[T])],
) -> Result<()> {
    let (reference_name, reference_data) = reference;
    for (name, data) in others {
        if data.len() != reference_data.len() {
            return Err(Error::length_mismatch(
                reference_name,
                reference_data.len(),
                name,
                data.len(),
            ));
        }
    }
    Ok(())
}

/// Validates a non-empty set of aligned series (e.g. OHLC bars).
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if lengths differ, then `Error::EmptyInput`
/// if the series are empty.
pub fn validate_aligned<T: SeriesElement>(
    reference: (&str, &[T]),
    others: &[(&str, &[T])],
) -> Result<()> {
    validate_equal_lengths(reference, others)?;
    reference.1.validate_not_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SeriesElement Tests ====================

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42).unwrap();
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100).unwrap();
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_f64() {
        let val: f64 = SeriesElement::from_f64(0.015).unwrap();
        assert!((val - 0.015).abs() < 1e-12);

        let val_f32: f32 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val_f32 - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_constants() {
        let two: f64 = SeriesElement::two();
        let hundred: f64 = SeriesElement::hundred();
        assert!((two - 2.0).abs() < 1e-12);
        assert!((hundred - 100.0).abs() < 1e-12);

        let hundred_f32: f32 = SeriesElement::hundred();
        assert!((hundred_f32 - 100.0).abs() < 1e-5);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_min_length() {
        let data: Vec<f64> = vec![1.0, 2.0, 3.0];
        assert!(data.validate_min_length(3, "test").is_ok());
        assert_eq!(
            data.validate_min_length(5, "test"),
            Err(Error::InsufficientData {
                required: 5,
                actual: 3,
                indicator: "test"
            })
        );
    }

    #[test]
    fn test_validate_not_empty() {
        let empty: Vec<f64> = vec![];
        assert_eq!(empty.validate_not_empty(), Err(Error::EmptyInput));
        assert!(vec![1.0_f64].validate_not_empty().is_ok());
    }

    #[test]
    fn test_validate_period() {
        assert!(validate_period(1).is_ok());
        assert!(matches!(
            validate_period(0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    #[test]
    fn test_validate_short_long() {
        assert!(validate_short_long(3, 5).is_ok());
        assert!(matches!(
            validate_short_long(5, 5),
            Err(Error::InvalidPeriod { period: 5, .. })
        ));
        assert!(matches!(
            validate_short_long(0, 5),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    #[test]
    fn test_validate_sub_period() {
        assert!(validate_sub_period(5, 5).is_ok());
        assert!(validate_sub_period(6, 5).is_err());
        assert!(validate_sub_period(0, 5).is_err());
    }

    #[test]
    fn test_validate_equal_lengths() {
        let high = [1.0_f64, 2.0, 3.0];
        let low = [0.5_f64, 1.5, 2.5];
        let close = [0.7_f64, 1.7];
        assert!(validate_equal_lengths(("high", &high[..]), &[("low", &low[..])]).is_ok());

        let err = validate_equal_lengths(
            ("high", &high[..]),
            &[("low", &low[..]), ("close", &close[..])],
        )
        .unwrap_err();
        assert_eq!(err, Error::length_mismatch("high", 3, "close", 2));
    }

    #[test]
    fn test_validate_aligned_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(
            validate_aligned(("high", &empty[..]), &[("low", &empty[..])]),
            Err(Error::EmptyInput)
        );
    }
}
