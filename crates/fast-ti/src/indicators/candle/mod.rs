//! Candle indicators: channels and envelopes drawn around price.
//!
//! - Moving constant envelopes and McGinley Dynamic envelopes: a fixed
//!   percentage either side of a central value
//! - Moving constant bands and McGinley Dynamic bands: a multiple of a
//!   deviation either side of a central value (Bollinger-style)
//! - Ichimoku cloud
//! - Donchian channels
//! - Keltner channel
//! - Supertrend
//!
//! Bands and envelopes are returned as [`Bands`](crate::indicators::Bands).
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::candle::single::moving_constant_envelopes;
//! use fast_ti::models::ConstantModelType;
//!
//! let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21];
//! let envelope =
//!     moving_constant_envelopes(&prices, ConstantModelType::SimpleMovingAverage, 3.0).unwrap();
//! assert!(envelope.lower < envelope.middle && envelope.middle < envelope.upper);
//! ```

pub mod bulk;
pub mod single;

/// Output of the Ichimoku cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IchimokuCloud<T> {
    /// Leading span A: mean of the base and conversion lines.
    pub span_a: T,
    /// Leading span B: midpoint of the span B window.
    pub span_b: T,
    /// Base line (kijun-sen).
    pub base: T,
    /// Conversion line (tenkan-sen).
    pub conversion: T,
    /// Close `base_period` bars back (chikou span).
    pub displaced_close: T,
}
