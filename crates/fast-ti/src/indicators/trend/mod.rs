//! Trend indicators.
//!
//! - Aroon up/down/oscillator: how recently the window made its extreme
//! - Parabolic time/price system (Parabolic SAR): a trailing stop-and-reverse
//! - Directional movement system (+DI, -DI, ADX, ADXR)
//! - Volume-price trend
//! - True strength index
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::trend::{ParabolicSar, Position};
//!
//! let highs = [100.64_f64, 102.39, 101.51, 99.48, 96.93];
//! let lows = [95.92_f64, 96.77, 95.84, 91.22, 89.12];
//!
//! let sar = ParabolicSar::new().position(Position::Long).compute(&highs, &lows).unwrap();
//! assert_eq!(sar.len(), highs.len());
//! // The low of the third bar crosses the stop: the system flips short at the extreme point.
//! assert_eq!(sar[2], 102.39);
//! ```

pub mod bulk;
pub mod single;

pub use crate::chained::Position;

use crate::error::Result;
use crate::traits::SeriesElement;

/// Output of the Aroon indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AroonIndicator<T> {
    /// Aroon up.
    pub up: T,
    /// Aroon down.
    pub down: T,
    /// `up - down`.
    pub oscillator: T,
}

/// One output of the directional movement system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalMovement<T> {
    /// Positive directional indicator.
    pub positive_di: T,
    /// Negative directional indicator.
    pub negative_di: T,
    /// Average directional index.
    pub adx: T,
    /// Average directional index rating.
    pub adxr: T,
}

/// Parabolic SAR configuration.
///
/// The acceleration factor starts at `af_start`, grows by `af_step` every time
/// the extreme point is extended, is capped at `af_max`, and resets on every
/// stop-and-reverse.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::trend::{ParabolicSar, Position};
///
/// let config = ParabolicSar::new();
/// assert_eq!(config.get_af_start(), 0.02);
/// assert_eq!(config.get_af_max(), 0.2);
/// assert_eq!(config.get_af_step(), 0.02);
/// assert_eq!(config.get_position(), Position::Long);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParabolicSar {
    af_start: f64,
    af_max: f64,
    af_step: f64,
    position: Position,
    previous_sar: f64,
}

impl Default for ParabolicSar {
    /// Creates a configuration with Wilder's parameters (0.02, 0.2, 0.02), long,
    /// with no previous SAR.
    fn default() -> Self {
        Self {
            af_start: 0.02,
            af_max: 0.2,
            af_step: 0.02,
            position: Position::Long,
            previous_sar: 0.0,
        }
    }
}

impl ParabolicSar {
    /// Creates a new configuration with Wilder's parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial acceleration factor.
    ///
    /// Default: 0.02
    #[must_use]
    pub const fn af_start(mut self, af_start: f64) -> Self {
        self.af_start = af_start;
        self
    }

    /// Sets the maximum acceleration factor.
    ///
    /// Default: 0.2
    #[must_use]
    pub const fn af_max(mut self, af_max: f64) -> Self {
        self.af_max = af_max;
        self
    }

    /// Sets the acceleration factor increment.
    ///
    /// Default: 0.02
    #[must_use]
    pub const fn af_step(mut self, af_step: f64) -> Self {
        self.af_step = af_step;
        self
    }

    /// Sets the position the system starts in.
    ///
    /// Default: `Position::Long`
    #[must_use]
    pub const fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the SAR carried over from a previous run; `0.0` starts fresh.
    ///
    /// Default: 0.0
    #[must_use]
    pub const fn previous_sar(mut self, previous_sar: f64) -> Self {
        self.previous_sar = previous_sar;
        self
    }

    /// Returns the initial acceleration factor.
    #[must_use]
    pub const fn get_af_start(&self) -> f64 {
        self.af_start
    }

    /// Returns the maximum acceleration factor.
    #[must_use]
    pub const fn get_af_max(&self) -> f64 {
        self.af_max
    }

    /// Returns the acceleration factor increment.
    #[must_use]
    pub const fn get_af_step(&self) -> f64 {
        self.af_step
    }

    /// Returns the starting position.
    #[must_use]
    pub const fn get_position(&self) -> Position {
        self.position
    }

    /// Returns the carried-over SAR.
    #[must_use]
    pub const fn get_previous_sar(&self) -> f64 {
        self.previous_sar
    }

    /// Checks the acceleration factor bounds.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if a factor is negative or the start
    /// exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        bulk::validate_acceleration(self.af_start, self.af_max, self.af_step)
    }

    /// Computes the SAR of every bar.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for invalid acceleration factors,
    /// `Error::LengthMismatch` if `highs` and `lows` differ in length, or
    /// `Error::EmptyInput` if they are empty.
    pub fn compute<T: SeriesElement>(&self, highs: &[T], lows: &[T]) -> Result<Vec<T>> {
        bulk::parabolic_time_price_system(
            highs,
            lows,
            T::from_f64(self.af_start)?,
            T::from_f64(self.af_max)?,
            T::from_f64(self.af_step)?,
            self.position,
            T::from_f64(self.previous_sar)?,
        )
    }
}
