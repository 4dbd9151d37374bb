//! Commonly used types, traits and modules for convenient importing.
//!
//! ```
//! use fast_ti::prelude::*;
//!
//! let highs = [100.64_f64, 102.39, 101.51, 99.48, 96.93];
//! let lows = [95.92_f64, 96.77, 95.84, 91.22, 89.12];
//!
//! let sar = ParabolicSar::new().compute(&highs, &lows).unwrap();
//! let aroon = trend::bulk::aroon_up(&highs, 3).unwrap();
//! assert_eq!(sar.len(), 5);
//! assert_eq!(aroon.len(), 3);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`] and [`ValidatedInput`]
//! - the model selectors [`ConstantModelType`], [`DeviationModel`] and [`MovingAverageType`]
//! - every indicator family module, so calls read `momentum::bulk::rate_of_change(..)`
//! - the output and configuration types

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Model selectors
pub use crate::indicators::moving_average::MovingAverageType;
pub use crate::models::{ConstantModelType, DeviationModel};

// Indicator families
pub use crate::indicators::{
    candle, correlation, momentum, moving_average, other, standard, strength, trend, volatility,
};

// Multi-output types
pub use crate::chart_trends::{TrendLine, TrendSegment};
pub use crate::indicators::candle::IchimokuCloud;
pub use crate::indicators::momentum::{ChaikinOscillator, McGinleyCci, McGinleyMacd};
pub use crate::indicators::other::{Positivity, ReturnOnInvestment};
pub use crate::indicators::standard::MacdOutput;
pub use crate::indicators::trend::{AroonIndicator, DirectionalMovement, Position};
pub use crate::indicators::Bands;

// Configuration types
pub use crate::batch::BatchProcessor;
pub use crate::chart_trends::TrendBreakConfig;
pub use crate::indicators::standard::{Bollinger, Macd, Rsi};
pub use crate::indicators::trend::ParabolicSar;
