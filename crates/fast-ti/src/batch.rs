//! Evaluating one indicator over many independent series.
//!
//! Indicators are pure functions of their inputs, so a universe of assets can
//! be processed concurrently. With the `parallel` feature enabled and at least
//! [`BatchProcessor::get_min_parallel_threshold`] series, the work is spread
//! over rayon's thread pool; otherwise it runs in order on the calling thread.
//! Each series is still evaluated sequentially, so chained indicators keep
//! their in-order recurrences.
//!
//! ```toml
//! [dependencies]
//! fast-ti = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use fast_ti::batch::BatchProcessor;
//! use fast_ti::indicators::moving_average::{bulk, MovingAverageType};
//!
//! let universe = vec![
//!     vec![100.2_f64, 100.46, 100.53, 100.38, 100.19],
//!     vec![74.71_f64, 71.98, 68.33, 63.6, 65.92],
//! ];
//!
//! let averages = BatchProcessor::new()
//!     .process(&universe, |prices| bulk::moving_average(prices, MovingAverageType::Simple, 3))
//!     .unwrap();
//! assert_eq!(averages.len(), 2);
//! assert_eq!(averages[0].len(), 3);
//! ```

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::traits::SeriesElement;

/// Runs an indicator over a batch of series, in parallel when worthwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchProcessor {
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }
}

impl BatchProcessor {
    /// Creates a processor with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of series from which the parallel path is taken.
    ///
    /// Default: 64
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the number of series from which the parallel path is taken.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    fn parallel(&self, count: usize) -> bool {
        let parallel = cfg!(feature = "parallel") && count >= self.min_parallel_threshold;
        debug!(series = count, parallel, "batch evaluation");
        parallel
    }

    /// Applies `indicator_fn` to every slice in `series`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.parallel(series.len()) {
            #[cfg(feature = "parallel")]
            return series.par_iter().map(|s| indicator_fn(s)).collect();
        }

        series.iter().map(|s| indicator_fn(s)).collect()
    }

    /// Applies `indicator_fn` to every series, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    pub fn process<T, F, R>(&self, series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        let refs: Vec<&[T]> = series.iter().map(Vec::as_slice).collect();
        self.process_refs(&refs, indicator_fn)
    }

    /// Applies `indicator_fn` to every `(high, low, close)` data set.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_ti::batch::BatchProcessor;
    /// use fast_ti::indicators::other::bulk::average_true_range;
    /// use fast_ti::models::ConstantModelType;
    ///
    /// let datasets = vec![
    ///     (vec![10.0_f64, 11.0, 12.0], vec![9.0, 10.0, 11.0], vec![9.5, 10.5, 11.5]),
    ///     (vec![20.0_f64, 21.0, 22.0], vec![19.0, 20.0, 21.0], vec![19.5, 20.5, 21.5]),
    /// ];
    /// let atr = BatchProcessor::new()
    ///     .process_ohlc(&datasets, |h, l, c| {
    ///         average_true_range(c, h, l, ConstantModelType::SimpleMovingAverage, 2)
    ///     })
    ///     .unwrap();
    /// assert_eq!(atr.len(), 2);
    /// ```
    pub fn process_ohlc<T, F, R>(
        &self,
        datasets: &[(Vec<T>, Vec<T>, Vec<T>)],
        indicator_fn: F,
    ) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T], &[T], &[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.parallel(datasets.len()) {
            #[cfg(feature = "parallel")]
            return datasets
                .par_iter()
                .map(|(h, l, c)| indicator_fn(h, l, c))
                .collect();
        }

        datasets
            .iter()
            .map(|(h, l, c)| indicator_fn(h, l, c))
            .collect()
    }
}

/// Applies `indicator_fn` to every series with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
pub fn process_batch<T, F, R>(series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}
