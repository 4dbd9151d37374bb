//! Momentum indicators.
//!
//! Oscillators that measure the speed and direction of price moves: RSI, the
//! stochastic family, Williams %R, Money Flow Index, rate of change, On-Balance
//! Volume, the Commodity Channel Index, MACD and its signal line, the Chaikin
//! Oscillator, the Percentage Price Oscillator and the Chande Momentum
//! Oscillator.
//!
//! Most functions take a [`ConstantModelType`](crate::models::ConstantModelType)
//! so the averaging step can be swapped without changing the indicator.
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::momentum::single;
//! use fast_ti::models::ConstantModelType;
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
//! let rsi = single::relative_strength_index(&prices, ConstantModelType::SimpleMovingAverage).unwrap();
//! assert!((rsi - 49.2537313432832).abs() < 1e-10);
//! ```

pub mod bulk;
pub mod single;

/// Output of the McGinley Dynamic Commodity Channel Index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McGinleyCci<T> {
    /// The Commodity Channel Index measured against the McGinley Dynamic.
    pub cci: T,
    /// The McGinley Dynamic, to be passed as `previous` to the next call.
    pub mcginley_dynamic: T,
}

/// Output of the McGinley Dynamic MACD line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McGinleyMacd<T> {
    /// Short McGinley Dynamic minus long McGinley Dynamic.
    pub macd: T,
    /// The short-period McGinley Dynamic.
    pub short_mcginley: T,
    /// The long-period McGinley Dynamic.
    pub long_mcginley: T,
}

/// Output of the Chaikin Oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaikinOscillator<T> {
    /// Short model of the accumulation/distribution line minus its long model.
    pub oscillator: T,
    /// The final accumulation/distribution value, to be chained into the next call.
    pub accumulation_distribution: T,
}
