//! Moving averages.
//!
//! The boundary-facing choice of average is [`MovingAverageType`]; it maps onto
//! the richer [`ConstantModelType`] used internally. The McGinley Dynamic is a
//! state-threaded average that adapts its speed to the ratio between the latest
//! price and its previous value.
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::moving_average::{bulk, single, MovingAverageType};
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
//!
//! let sma = single::moving_average(&prices, MovingAverageType::Simple).unwrap();
//! assert!((sma - 100.352).abs() < 1e-10);
//!
//! let rolling = bulk::moving_average(&prices, MovingAverageType::Simple, 3).unwrap();
//! assert_eq!(rolling.len(), 3);
//! ```

pub mod bulk;
pub mod single;

use crate::models::ConstantModelType;

/// The moving averages accepted by [`single::moving_average`] and [`bulk::moving_average`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovingAverageType {
    /// Arithmetic mean.
    Simple,
    /// Weighted mean with smoothing factor `1 / N`.
    Smoothed,
    /// Weighted mean with smoothing factor `2 / (N + 1)`.
    Exponential,
}

impl From<MovingAverageType> for ConstantModelType {
    fn from(ma_type: MovingAverageType) -> Self {
        match ma_type {
            MovingAverageType::Simple => Self::SimpleMovingAverage,
            MovingAverageType::Smoothed => Self::SmoothedMovingAverage,
            MovingAverageType::Exponential => Self::ExponentialMovingAverage,
        }
    }
}
