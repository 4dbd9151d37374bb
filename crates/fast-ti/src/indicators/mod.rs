//! Technical indicators, grouped by family.
//!
//! Every family exposes two submodules:
//!
//! - `single`: evaluates exactly one window (the whole slice passed in) and
//!   returns one value or one output struct
//! - `bulk`: slides a window of `period` values over the input and returns one
//!   output per window, oldest first (`L - period + 1` outputs, empty when the
//!   period exceeds the data)
//!
//! State-threaded indicators (McGinley Dynamic, On-Balance Volume, volume
//! indices, Parabolic SAR, Chaikin) take the previous output as an explicit
//! argument; `0.0` means "no prior state".
//!
//! # Families
//!
//! - [`moving_average`]: configurable moving averages and the McGinley Dynamic
//! - [`standard`]: classic fixed-parameter indicators (SMA, Bollinger, MACD, RSI)
//! - [`momentum`]: oscillators and momentum measures
//! - [`other`]: ROI, true range, ATR, internal bar strength, positivity
//! - [`strength`]: volume-based strength measures
//! - [`trend`]: Aroon, Parabolic SAR, DMS, VPT, TSI
//! - [`volatility`]: Ulcer Index and the volatility system
//! - [`candle`]: envelopes, bands, channels, Ichimoku, Supertrend
//! - [`correlation`]: generalised two-asset correlation

pub mod candle;
pub mod correlation;
pub mod momentum;
pub mod moving_average;
pub mod other;
pub mod standard;
pub mod strength;
pub mod trend;
pub mod volatility;

/// A lower/middle/upper channel around a central value.
///
/// Shared by Bollinger Bands, envelopes, constant bands, Donchian and Keltner channels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bands<T> {
    /// The lower band.
    pub lower: T,
    /// The middle band.
    pub middle: T,
    /// The upper band.
    pub upper: T,
}

impl<T: Copy> Bands<T> {
    /// Builds a channel from its three bands.
    #[inline]
    #[must_use]
    pub const fn new(lower: T, middle: T, upper: T) -> Self {
        Self {
            lower,
            middle,
            upper,
        }
    }

    /// The bands as a `(lower, middle, upper)` tuple.
    #[inline]
    #[must_use]
    pub const fn as_tuple(&self) -> (T, T, T) {
        (self.lower, self.middle, self.upper)
    }
}
