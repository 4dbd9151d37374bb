//! Chart trend analysis.
//!
//! - [`extrema`]: peak and valley detection, and the trend lines through them
//! - [`regression`]: ordinary least squares fits and their goodness-of-fit statistics
//! - [`breakdown`]: segmentation of a series into consecutive linear trends
//!
//! # Example
//!
//! ```
//! use fast_ti::chart_trends::{break_down_trends, overall_trend, TrendBreakConfig};
//!
//! let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
//!
//! let line = overall_trend(&prices).unwrap();
//! assert!((line.slope - -0.01).abs() < 1e-9);
//!
//! let segments = break_down_trends(&prices, &TrendBreakConfig::default()).unwrap();
//! assert_eq!(segments.len(), 2);
//! assert_eq!((segments[0].start, segments[0].end), (0, 2));
//! assert_eq!((segments[1].start, segments[1].end), (2, 4));
//! ```

pub mod breakdown;
pub mod extrema;
pub mod regression;

pub use breakdown::{break_down_trends, TrendBreakConfig, TrendSegment};
pub use extrema::{peak_trend, peaks, valley_trend, valleys};
pub use regression::{least_squares, overall_trend, FitStatistics, TrendLine};
