//! Correlation between two assets.
//!
//! A generalised Pearson correlation: the covariance about a configurable
//! central value divided by the product of a configurable deviation of each
//! asset. With the simple moving average and the standard deviation this is
//! the classic Pearson coefficient; other model pairs are not bounded to
//! `[-1, 1]`.
//!
//! ```text
//! cov  = Σ (a_i - ct(a)) · (b_i - ct(b)) / n
//! corr = cov / (dev(a) · dev(b))
//! ```

pub mod bulk;
pub mod single;
