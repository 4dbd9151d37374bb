//! Strength indicators: how much conviction, measured through volume or the
//! body of each bar, sits behind a price move.
//!
//! - Accumulation/Distribution line
//! - Positive and Negative Volume Index
//! - Relative Vigor Index

pub mod bulk;
pub mod single;
