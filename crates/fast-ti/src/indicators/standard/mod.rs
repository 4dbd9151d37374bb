//! Classic indicators with their textbook parameters.
//!
//! The functions in [`single`] and [`bulk`] fix the parameters that traders
//! usually mean when they say "Bollinger Bands", "MACD" or "RSI":
//!
//! | Indicator | Parameters | Window |
//! |-----------|------------|--------|
//! | Bollinger Bands | SMA(20) ± 2σ | 20 |
//! | MACD | EMA(12) - EMA(26), signal EMA(9) | 34 |
//! | RSI | 14 prices, smoothed averages | 14 |
//!
//! The same indicators with other parameters are available through the
//! configuration builders [`Bollinger`], [`Macd`] and [`Rsi`], which follow the
//! usual `new()` / setters / `compute()` pattern.
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::standard::{Bollinger, Rsi};
//! use fast_ti::models::ConstantModelType;
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19, 100.21, 100.32];
//!
//! let bands = Bollinger::new().period(5).std_dev(1.5).compute(&prices).unwrap();
//! assert_eq!(bands.len(), 3);
//! assert!(bands[0].lower < bands[0].middle && bands[0].middle < bands[0].upper);
//!
//! let rsi = Rsi::new()
//!     .period(5)
//!     .model(ConstantModelType::SimpleMovingAverage)
//!     .compute(&prices)
//!     .unwrap();
//! assert_eq!(rsi.len(), 3);
//! ```

pub mod bulk;
pub mod single;

use crate::error::{Error, Result};
use crate::indicators::momentum;
use crate::indicators::Bands;
use crate::kernels::window::rolling;
use crate::models::{central_tendency, deviation, ConstantModelType, DeviationModel};
use crate::traits::{validate_period, validate_short_long, SeriesElement, ValidatedInput};

/// Checks that a single-window call received exactly one window of prices.
fn validate_window<T: SeriesElement>(
    prices: &[T],
    window: usize,
    indicator: &'static str,
) -> Result<()> {
    prices.validate_min_length(window, indicator)?;
    if prices.len() > window {
        return Err(Error::length_mismatch(
            "prices",
            prices.len(),
            indicator,
            window,
        ));
    }
    Ok(())
}

// ==================== Bollinger Bands ====================

/// Bollinger Bands configuration.
///
/// Middle band = simple moving average; upper/lower = middle ± `std_dev`
/// population standard deviations.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::standard::Bollinger;
///
/// let config = Bollinger::new();
/// assert_eq!(config.get_period(), 20);
/// assert_eq!(config.get_std_dev(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
}

impl Default for Bollinger {
    /// Creates a Bollinger Bands configuration with standard parameters (20, 2.0).
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a new Bollinger Bands configuration with standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    ///
    /// Default: 20
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier for the bands.
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Computes the bands of exactly one window of `period` prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is zero,
    /// `Error::InsufficientData` if there are fewer than `period` prices, or
    /// `Error::LengthMismatch` if there are more.
    pub fn compute_window<T: SeriesElement>(&self, prices: &[T]) -> Result<Bands<T>> {
        validate_period(self.period)?;
        validate_window(prices, self.period, "bollinger bands")?;
        let multiplier = T::from_f64(self.std_dev)?;
        let middle = central_tendency(prices, ConstantModelType::SimpleMovingAverage)?;
        let spread = multiplier * deviation(prices, DeviationModel::StandardDeviation)?;
        Ok(Bands::new(middle - spread, middle, middle + spread))
    }

    /// Computes the bands of every window of `period` prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if `prices` is empty, or
    /// `Error::InvalidPeriod` if the period is zero.
    pub fn compute<T: SeriesElement>(&self, prices: &[T]) -> Result<Vec<Bands<T>>> {
        prices.validate_not_empty()?;
        rolling(prices, self.period, |window| self.compute_window(window))
    }
}

// ==================== MACD ====================

/// Output of the MACD indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacdOutput<T> {
    /// Short EMA minus long EMA at the end of the window.
    pub macd: T,
    /// EMA of the last `signal_period` MACD values.
    pub signal: T,
    /// `macd - signal`.
    pub histogram: T,
}

/// MACD configuration (exponential averages throughout).
///
/// One MACD output needs `long + signal - 1` prices: `signal` MACD values,
/// each computed over `long` prices.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::standard::Macd;
///
/// let config = Macd::new();
/// assert_eq!(config.window_len(), 34);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Macd {
    short_period: usize,
    long_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    /// Creates a MACD configuration with standard parameters (12, 26, 9).
    fn default() -> Self {
        Self {
            short_period: 12,
            long_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// Creates a new MACD configuration with standard parameters (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the short EMA period.
    ///
    /// Default: 12
    #[must_use]
    pub const fn short_period(mut self, period: usize) -> Self {
        self.short_period = period;
        self
    }

    /// Sets the long EMA period.
    ///
    /// Default: 26
    #[must_use]
    pub const fn long_period(mut self, period: usize) -> Self {
        self.long_period = period;
        self
    }

    /// Sets the signal EMA period.
    ///
    /// Default: 9
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Returns the short period.
    #[must_use]
    pub const fn get_short_period(&self) -> usize {
        self.short_period
    }

    /// Returns the long period.
    #[must_use]
    pub const fn get_long_period(&self) -> usize {
        self.long_period
    }

    /// Returns the signal period.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal_period
    }

    /// Number of prices one MACD output consumes.
    #[must_use]
    pub const fn window_len(&self) -> usize {
        (self.long_period + self.signal_period).saturating_sub(1)
    }

    fn validate(&self) -> Result<()> {
        validate_short_long(self.short_period, self.long_period)?;
        validate_period(self.signal_period)
    }

    /// Computes MACD, signal and histogram from exactly [`window_len`](Self::window_len) prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` for an invalid period combination,
    /// `Error::InsufficientData` if there are too few prices, or
    /// `Error::LengthMismatch` if there are too many.
    pub fn compute_window<T: SeriesElement>(&self, prices: &[T]) -> Result<MacdOutput<T>> {
        self.validate()?;
        validate_window(prices, self.window_len(), "macd")?;
        let ema = ConstantModelType::ExponentialMovingAverage;
        let macds = rolling(prices, self.long_period, |window| {
            momentum::single::macd_line(window, self.short_period, ema, ema)
        })?;
        let signal = momentum::single::signal_line(&macds, ema)?;
        let macd = macds[macds.len() - 1];
        Ok(MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        })
    }

    /// Computes MACD for every window of [`window_len`](Self::window_len) prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if `prices` is empty, or
    /// `Error::InvalidPeriod` for an invalid period combination.
    pub fn compute<T: SeriesElement>(&self, prices: &[T]) -> Result<Vec<MacdOutput<T>>> {
        prices.validate_not_empty()?;
        self.validate()?;
        rolling(prices, self.window_len(), |window| self.compute_window(window))
    }
}

// ==================== RSI ====================

/// RSI configuration.
///
/// # Example
///
/// ```
/// use fast_ti::indicators::standard::Rsi;
/// use fast_ti::models::ConstantModelType;
///
/// let config = Rsi::new();
/// assert_eq!(config.get_period(), 14);
/// assert_eq!(config.get_model(), ConstantModelType::SmoothedMovingAverage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rsi {
    period: usize,
    model: ConstantModelType,
}

impl Default for Rsi {
    /// Creates an RSI configuration with standard parameters (14, smoothed).
    fn default() -> Self {
        Self {
            period: 14,
            model: ConstantModelType::SmoothedMovingAverage,
        }
    }
}

impl Rsi {
    /// Creates a new RSI configuration with standard parameters (14, smoothed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of prices per window.
    ///
    /// Default: 14
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the model used to average gains and losses.
    ///
    /// Default: `SmoothedMovingAverage`
    #[must_use]
    pub const fn model(mut self, model: ConstantModelType) -> Self {
        self.model = model;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the averaging model.
    #[must_use]
    pub const fn get_model(&self) -> ConstantModelType {
        self.model
    }

    /// Computes the RSI of exactly one window of `period` prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is zero,
    /// `Error::InsufficientData` if there are fewer than `period` prices, or
    /// `Error::LengthMismatch` if there are more.
    pub fn compute_window<T: SeriesElement>(&self, prices: &[T]) -> Result<T> {
        validate_period(self.period)?;
        validate_window(prices, self.period, "rsi")?;
        momentum::single::relative_strength_index(prices, self.model)
    }

    /// Computes the RSI of every window of `period` prices.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if `prices` is empty, or
    /// `Error::InvalidPeriod` if the period is zero.
    pub fn compute<T: SeriesElement>(&self, prices: &[T]) -> Result<Vec<T>> {
        prices.validate_not_empty()?;
        rolling(prices, self.period, |window| self.compute_window(window))
    }
}
