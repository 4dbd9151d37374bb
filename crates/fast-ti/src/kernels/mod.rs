//! Reusable evaluation kernels.
//!
//! - [`window`]: the sliding-window engine behind every bulk indicator
//! - [`rolling_extrema`]: monotonic deque algorithm for O(n) rolling max/min

pub mod rolling_extrema;
pub mod window;

pub use rolling_extrema::{
    rolling_extreme_with_index, rolling_max, rolling_min, Extreme, MonotonicDeque,
};
pub use window::{rolling, rolling_indexed, rolling_len, rolling_with_state};
