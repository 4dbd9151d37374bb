//! Rolling extrema using a monotonic deque for O(n) rolling max/min.
//!
//! Channel and range indicators (Donchian, Stochastic, Williams %R, Aroon,
//! peak/valley detection) need the extreme value of every window, and Aroon and
//! the peak scanner also need *where* in the window it occurred.
//!
//! # Algorithm
//!
//! The deque holds indices whose values are monotonically ordered (decreasing
//! for max, increasing for min). Each new value evicts every queued value it
//! matches or beats, so among equal extremes the most recent index survives,
//! and indices that leave the window are dropped from the front.
//!
//! # Complexity
//!
//! - Time: O(n), amortised O(1) per element
//! - Space: O(k) for the deque, where k is the period
//!
//! # Example
//!
//! ```
//! use fast_ti::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let highs = [101.26_f64, 102.57, 102.32, 100.69, 100.83, 101.73, 102.01];
//! assert_eq!(rolling_max(&highs, 5).unwrap(), vec![102.57, 102.57, 102.32]);
//! assert_eq!(rolling_min(&highs, 5).unwrap(), vec![100.69, 100.69, 100.69]);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::Result;
use crate::kernels::window::rolling_len;
use crate::traits::{validate_period, SeriesElement};

/// A monotonic deque for efficiently tracking rolling extrema.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    /// Indices into the data slice, ordered by value
    deque: VecDeque<usize>,
    /// The window size
    period: usize,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a new monotonic deque with the specified window size.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Pushes `data[index]` while tracking the window maximum.
    ///
    /// `NaN` values are never considered an extremum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_max(&mut self, index: usize, data: &[T]) {
        self.push(index, data, |incoming, queued| incoming >= queued);
    }

    /// Pushes `data[index]` while tracking the window minimum.
    ///
    /// `NaN` values are never considered an extremum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_min(&mut self, index: usize, data: &[T]) {
        self.push(index, data, |incoming, queued| incoming <= queued);
    }

    fn push(&mut self, index: usize, data: &[T], dominates: impl Fn(T, T) -> bool) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                if data[back].is_nan() || dominates(value, data[back]) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }
        self.remove_expired(index);
    }

    /// Removes indices that are outside the window ending at `current_index`.
    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index + 1 < self.period {
            return;
        }
        let window_start = current_index + 1 - self.period;
        while let Some(&front) = self.deque.front() {
            if front < window_start {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Returns the index of the current extremum, `None` if the window holds no
    /// comparable value.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum value, `NaN` if there is none.
    #[inline]
    pub fn extremum(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

/// Which extreme a rolling scan tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// Window maximum.
    Max,
    /// Window minimum.
    Min,
}

/// Rolling extreme values with the absolute index at which each occurred.
///
/// Returns one `(value, index)` pair per window; ties resolve to the most
/// recent index. Windows made only of `NaN` report `(NaN, window_end)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_extreme_with_index<T: SeriesElement>(
    data: &[T],
    period: usize,
    extreme: Extreme,
) -> Result<Vec<(T, usize)>> {
    validate_period(period)?;
    let mut output = Vec::with_capacity(rolling_len(data.len(), period));
    let mut deque = MonotonicDeque::new(period);
    for index in 0..data.len() {
        match extreme {
            Extreme::Max => deque.push_max(index, data),
            Extreme::Min => deque.push_min(index, data),
        }
        if index + 1 >= period {
            let at = deque.front_index().unwrap_or(index);
            output.push((deque.extremum(data), at));
        }
    }
    Ok(output)
}

/// Computes the rolling maximum, one value per window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    Ok(rolling_extreme_with_index(data, period, Extreme::Max)?
        .into_iter()
        .map(|(value, _)| value)
        .collect())
}

/// Computes the rolling minimum, one value per window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    Ok(rolling_extreme_with_index(data, period, Extreme::Min)?
        .into_iter()
        .map(|(value, _)| value)
        .collect())
}
