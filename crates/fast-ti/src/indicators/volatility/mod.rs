//! Volatility indicators.
//!
//! - Ulcer Index: root mean square of the percentage drawdowns from the
//!   running high of a window
//! - Volatility system: Wilder's stop-and-reverse system driven by a multiple
//!   of the average true range
//!
//! # Example
//!
//! ```
//! use fast_ti::indicators::volatility::{bulk, single};
//!
//! let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21, 100.32, 100.28];
//! let ulcer = single::ulcer_index(&prices[..5]).unwrap();
//! let rolling = bulk::ulcer_index(&prices, 5).unwrap();
//! assert_eq!(rolling.len(), 3);
//! assert_eq!(rolling[0], ulcer);
//! ```

pub mod bulk;
pub mod single;
