//! fast-ti: technical indicators over price and volume series
//!
//! This crate computes the indicators used in financial charting from plain
//! slices of prices and volumes: configurable moving averages, oscillators,
//! bands and channels, trend, strength and volatility measures, and a
//! regression-based trend segmentation.
//!
//! # Features
//!
//! - **Configurable models**: most indicators take a [`ConstantModelType`]
//!   (mean, smoothed, exponential, median, mode) and/or a [`DeviationModel`]
//! - **Single and bulk forms**: every family evaluates one window (`single`)
//!   or every window of a series (`bulk`)
//! - **Explicit state**: chained indicators take their previous value as an
//!   argument, so callers own all state between calls
//! - **Generics**: works with both `f32` and `f64`
//! - **Errors, not panics**: preconditions are checked up front and reported as [`Error`]
//!
//! # Quick Start
//!
//! ```
//! use fast_ti::prelude::*;
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
//!
//! let sma = moving_average::bulk::moving_average(&prices, MovingAverageType::Simple, 3).unwrap();
//! assert_eq!(sma.len(), 3);
//! assert!((sma[0] - 100.39666666666666).abs() < 1e-10);
//!
//! // A window longer than the series yields nothing.
//! let none = moving_average::bulk::moving_average(&prices, MovingAverageType::Simple, 6).unwrap();
//! assert!(none.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`models`]: the central tendency and deviation models
//! - [`kernels`]: the rolling-window engine and rolling extrema
//! - [`chained`]: single-step recurrences of the stateful indicators
//! - [`indicators`]: the indicator families
//! - [`chart_trends`]: peaks, valleys, trend lines and trend breakdown
//! - [`batch`]: one indicator over many series, optionally in parallel
//!
//! # Error Handling
//!
//! ```
//! use fast_ti::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! let result = moving_average::bulk::moving_average(&empty, MovingAverageType::Simple, 3);
//! assert_eq!(result, Err(Error::EmptyInput));
//!
//! let zero_period = moving_average::bulk::moving_average(&[1.0_f64], MovingAverageType::Simple, 0);
//! assert!(matches!(zero_period, Err(Error::InvalidPeriod { .. })));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod chained;
pub mod chart_trends;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod models;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{ConstantModelType, DeviationModel};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, EPSILON, LOOSE_EPSILON};
