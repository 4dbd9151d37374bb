//! Segmentation of a series into consecutive linear trends.
//!
//! The current segment grows one point at a time. Each candidate extension is
//! refitted and judged on three statistics against a soft and a hard bound:
//!
//! | statistic             | violation                                         |
//! |-----------------------|---------------------------------------------------|
//! | adjusted `R²`         | below the minimum                                 |
//! | RMSE                  | above `multiplier ×` the last clean segment's RMSE |
//! | Durbin–Watson         | outside the `[min, max]` band                     |
//!
//! A hard violation, or a soft one that exhausts the outlier budget, closes
//! the segment at its last accepted point and starts the next segment there.
//! A soft violation within the budget is absorbed. Perfect fits carry no
//! information and never violate anything.

use tracing::{debug, trace};

use crate::chart_trends::regression::{fit_statistics, index_axis, least_squares, FitStatistics, TrendLine};
use crate::error::{Error, Result};
use crate::traits::{SeriesElement, ValidatedInput};

/// Baseline RMSE below which the RMSE bounds are not applied.
const RMSE_FLOOR: f64 = 1e-12;

/// One trend of a segmented series, covering indices `start..=end`.
///
/// Consecutive segments share their boundary index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendSegment<T> {
    /// First index of the segment.
    pub start: usize,
    /// Last index of the segment.
    pub end: usize,
    /// Slope of the segment's least squares line.
    pub slope: T,
    /// Intercept of the segment's least squares line (at index 0 of the series).
    pub intercept: T,
}

/// Thresholds for [`break_down_trends`].
///
/// # Example
///
/// ```
/// use fast_ti::chart_trends::TrendBreakConfig;
///
/// let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
/// let segments = TrendBreakConfig::new().max_outliers(1).compute(&prices).unwrap();
/// assert_eq!(segments.first().map(|s| s.start), Some(0));
/// assert_eq!(segments.last().map(|s| s.end), Some(prices.len() - 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendBreakConfig {
    max_outliers: usize,
    soft_adj_r_squared_minimum: f64,
    hard_adj_r_squared_minimum: f64,
    soft_rmse_multiplier: f64,
    hard_rmse_multiplier: f64,
    soft_durbin_watson_min: f64,
    soft_durbin_watson_max: f64,
    hard_durbin_watson_min: f64,
    hard_durbin_watson_max: f64,
}

impl Default for TrendBreakConfig {
    fn default() -> Self {
        Self {
            max_outliers: 1,
            soft_adj_r_squared_minimum: 0.75,
            hard_adj_r_squared_minimum: 0.5,
            soft_rmse_multiplier: 2.0,
            hard_rmse_multiplier: 3.0,
            soft_durbin_watson_min: 1.0,
            soft_durbin_watson_max: 3.0,
            hard_durbin_watson_min: 0.7,
            hard_durbin_watson_max: 3.3,
        }
    }
}

impl TrendBreakConfig {
    /// Creates a configuration with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many soft violations a segment absorbs before it is closed.
    ///
    /// Default: 1
    #[must_use]
    pub const fn max_outliers(mut self, max_outliers: usize) -> Self {
        self.max_outliers = max_outliers;
        self
    }

    /// Sets the soft and hard adjusted `R²` minimums.
    ///
    /// Default: 0.75 and 0.5
    #[must_use]
    pub const fn adj_r_squared_minimum(mut self, soft: f64, hard: f64) -> Self {
        self.soft_adj_r_squared_minimum = soft;
        self.hard_adj_r_squared_minimum = hard;
        self
    }

    /// Sets the soft and hard RMSE growth multipliers.
    ///
    /// Default: 2.0 and 3.0
    #[must_use]
    pub const fn rmse_multiplier(mut self, soft: f64, hard: f64) -> Self {
        self.soft_rmse_multiplier = soft;
        self.hard_rmse_multiplier = hard;
        self
    }

    /// Sets the soft Durbin–Watson band.
    ///
    /// Default: [1.0, 3.0]
    #[must_use]
    pub const fn soft_durbin_watson(mut self, min: f64, max: f64) -> Self {
        self.soft_durbin_watson_min = min;
        self.soft_durbin_watson_max = max;
        self
    }

    /// Sets the hard Durbin–Watson band.
    ///
    /// Default: [0.7, 3.3]
    #[must_use]
    pub const fn hard_durbin_watson(mut self, min: f64, max: f64) -> Self {
        self.hard_durbin_watson_min = min;
        self.hard_durbin_watson_max = max;
        self
    }

    /// Returns the outlier budget.
    #[must_use]
    pub const fn get_max_outliers(&self) -> usize {
        self.max_outliers
    }

    /// Returns the soft and hard adjusted `R²` minimums.
    #[must_use]
    pub const fn get_adj_r_squared_minimum(&self) -> (f64, f64) {
        (self.soft_adj_r_squared_minimum, self.hard_adj_r_squared_minimum)
    }

    /// Returns the soft and hard RMSE multipliers.
    #[must_use]
    pub const fn get_rmse_multiplier(&self) -> (f64, f64) {
        (self.soft_rmse_multiplier, self.hard_rmse_multiplier)
    }

    /// Returns the soft Durbin–Watson band.
    #[must_use]
    pub const fn get_soft_durbin_watson(&self) -> (f64, f64) {
        (self.soft_durbin_watson_min, self.soft_durbin_watson_max)
    }

    /// Returns the hard Durbin–Watson band.
    #[must_use]
    pub const fn get_hard_durbin_watson(&self) -> (f64, f64) {
        (self.hard_durbin_watson_min, self.hard_durbin_watson_max)
    }

    /// Checks that every threshold is a number and that each hard bound is
    /// looser than its soft bound.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` naming the offending threshold.
    pub fn validate(&self) -> Result<()> {
        let reject = |name: &'static str, reason: &'static str| {
            Err(Error::InvalidParameter { name, reason })
        };
        let (soft_r2, hard_r2) = self.get_adj_r_squared_minimum();
        if soft_r2.is_nan() || hard_r2.is_nan() || hard_r2 > soft_r2 {
            return reject(
                "hard_adj_r_squared_minimum",
                "hard adjusted r squared minimum must not exceed the soft one",
            );
        }
        let (soft_rmse, hard_rmse) = self.get_rmse_multiplier();
        if soft_rmse.is_nan() || soft_rmse <= 0.0 {
            return reject("soft_rmse_multiplier", "rmse multiplier must be positive");
        }
        if hard_rmse.is_nan() || hard_rmse < soft_rmse {
            return reject(
                "hard_rmse_multiplier",
                "hard rmse multiplier must not be below the soft one",
            );
        }
        let (soft_min, soft_max) = self.get_soft_durbin_watson();
        if soft_min.is_nan() || soft_max.is_nan() || soft_min > soft_max {
            return reject("soft_durbin_watson", "durbin-watson band is inverted");
        }
        let (hard_min, hard_max) = self.get_hard_durbin_watson();
        if hard_min.is_nan() || hard_max.is_nan() || hard_min > soft_min || hard_max < soft_max {
            return reject(
                "hard_durbin_watson",
                "hard durbin-watson band must contain the soft one",
            );
        }
        Ok(())
    }

    /// Segments `prices` with these thresholds.
    ///
    /// # Errors
    ///
    /// See [`break_down_trends`].
    pub fn compute<T: SeriesElement>(&self, prices: &[T]) -> Result<Vec<TrendSegment<T>>> {
        break_down_trends(prices, self)
    }
}

/// The thresholds converted to the series element type.
struct Thresholds<T> {
    max_outliers: usize,
    soft_r2: T,
    hard_r2: T,
    soft_rmse: T,
    hard_rmse: T,
    soft_dw: (T, T),
    hard_dw: (T, T),
    rmse_floor: T,
}

impl<T: SeriesElement> Thresholds<T> {
    fn from_config(config: &TrendBreakConfig) -> Result<Self> {
        let convert = T::from_f64;
        Ok(Self {
            max_outliers: config.max_outliers,
            soft_r2: convert(config.soft_adj_r_squared_minimum)?,
            hard_r2: convert(config.hard_adj_r_squared_minimum)?,
            soft_rmse: convert(config.soft_rmse_multiplier)?,
            hard_rmse: convert(config.hard_rmse_multiplier)?,
            soft_dw: (
                convert(config.soft_durbin_watson_min)?,
                convert(config.soft_durbin_watson_max)?,
            ),
            hard_dw: (
                convert(config.hard_durbin_watson_min)?,
                convert(config.hard_durbin_watson_max)?,
            ),
            rmse_floor: convert(RMSE_FLOOR)?,
        })
    }

    /// Returns `(hard, soft)` violation flags for a candidate fit.
    fn judge(&self, stats: &FitStatistics<T>, baseline_rmse: T) -> (bool, bool) {
        if stats.is_degenerate() {
            return (false, false);
        }
        let mut hard = false;
        let mut soft = false;

        if stats.adjusted_r_squared < self.hard_r2 {
            hard = true;
        } else if stats.adjusted_r_squared < self.soft_r2 {
            soft = true;
        }

        if baseline_rmse > self.rmse_floor {
            if stats.rmse > self.hard_rmse * baseline_rmse {
                hard = true;
            } else if stats.rmse > self.soft_rmse * baseline_rmse {
                soft = true;
            }
        }

        let outside = |(min, max): (T, T)| stats.durbin_watson < min || stats.durbin_watson > max;
        if outside(self.hard_dw) {
            hard = true;
        } else if outside(self.soft_dw) {
            soft = true;
        }

        (hard, soft)
    }
}

fn fit_segment<T: SeriesElement>(
    prices: &[T],
    start: usize,
    end: usize,
) -> Result<(TrendLine<T>, FitStatistics<T>)> {
    let xs = index_axis(start, end)?;
    let ys = &prices[start..=end];
    let line = least_squares(&xs, ys)?;
    let stats = fit_statistics(&xs, ys, &line)?;
    Ok((line, stats))
}

/// Splits `prices` into consecutive linear trends.
///
/// Segments are returned oldest first; the first starts at 0, the last ends
/// at `L - 1`, and each starts where the previous one ended.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `config` does not validate,
/// `Error::InsufficientData` for fewer than three prices, or
/// `Error::NumericConversion` if a threshold cannot be represented as `T`.
pub fn break_down_trends<T: SeriesElement>(
    prices: &[T],
    config: &TrendBreakConfig,
) -> Result<Vec<TrendSegment<T>>> {
    config.validate()?;
    prices.validate_min_length(3, "trend breakdown")?;
    let thresholds = Thresholds::from_config(config)?;

    let mut segments = Vec::new();
    let mut start = 0;
    let mut end = 1;
    let (mut line, first_stats) = fit_segment(prices, start, end)?;
    let mut baseline_rmse = first_stats.rmse;
    let mut outliers = 0;

    for index in 2..prices.len() {
        let (candidate, stats) = fit_segment(prices, start, index)?;
        let (hard, soft) = thresholds.judge(&stats, baseline_rmse);
        if soft && !hard {
            outliers += 1;
            trace!(index, outliers, "soft trend threshold violated");
        }

        if hard || outliers > thresholds.max_outliers {
            debug!(
                start,
                end,
                index,
                reason = if hard { "hard threshold" } else { "outlier budget" },
                "trend segment closed"
            );
            segments.push(TrendSegment {
                start,
                end,
                slope: line.slope,
                intercept: line.intercept,
            });
            start = end;
            let (refit, refit_stats) = fit_segment(prices, start, index)?;
            line = refit;
            baseline_rmse = refit_stats.rmse;
            outliers = 0;
        } else {
            line = candidate;
            if !soft {
                baseline_rmse = stats.rmse;
            }
        }
        end = index;
    }

    segments.push(TrendSegment {
        start,
        end,
        slope: line.slope,
        intercept: line.intercept,
    });
    Ok(segments)
}
