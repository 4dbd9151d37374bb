//! Input validation tests.
//!
//! Every public entry point fails fast with a typed error for:
//! - Empty input
//! - Zero or inverted periods
//! - Series of mismatched lengths
//! - Too little data for the requested windows
//! - Out-of-range configuration parameters

#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

mod common;

use common::generate_ohlcv;
use fast_ti::batch::BatchProcessor;
use fast_ti::chart_trends::{overall_trend, peak_trend, peaks, TrendBreakConfig};
use fast_ti::error::Error;
use fast_ti::indicators::moving_average::MovingAverageType;
use fast_ti::indicators::standard::{Bollinger, Macd};
use fast_ti::indicators::trend::ParabolicSar;
use fast_ti::indicators::{
    candle, correlation, momentum, moving_average, other, standard, strength, trend, volatility,
};
use fast_ti::{ConstantModelType, DeviationModel};

const SMA: ConstantModelType = ConstantModelType::SimpleMovingAverage;
const EMA: ConstantModelType = ConstantModelType::ExponentialMovingAverage;

// ==================== Empty Array Tests ====================

#[test]
fn validation_empty_bulk_series() {
    let empty: Vec<f64> = vec![];
    assert_eq!(
        moving_average::bulk::moving_average(&empty, MovingAverageType::Simple, 3),
        Err(Error::EmptyInput)
    );
    assert_eq!(moving_average::bulk::mcginley_dynamic(&empty, 0.0, 3), Err(Error::EmptyInput));
    assert_eq!(standard::bulk::simple_moving_average(&empty, 3), Err(Error::EmptyInput));
    assert_eq!(momentum::bulk::rate_of_change(&empty), Err(Error::EmptyInput));
    assert_eq!(momentum::bulk::stochastic_oscillator(&empty, 3), Err(Error::EmptyInput));
    assert_eq!(volatility::bulk::ulcer_index(&empty, 3), Err(Error::EmptyInput));
}

#[test]
fn validation_empty_single_window() {
    let empty: Vec<f64> = vec![];
    assert_eq!(standard::single::simple_moving_average(&empty), Err(Error::EmptyInput));
    assert_eq!(momentum::single::chande_momentum_oscillator(&empty), Err(Error::EmptyInput));
    assert_eq!(volatility::single::ulcer_index(&empty), Err(Error::EmptyInput));
    assert_eq!(
        moving_average::single::moving_average(&empty, MovingAverageType::Exponential),
        Err(Error::EmptyInput)
    );
}

// ==================== Period Tests ====================

#[test]
fn validation_zero_period() {
    let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
    assert!(matches!(
        moving_average::bulk::moving_average(&prices, MovingAverageType::Simple, 0),
        Err(Error::InvalidPeriod { period: 0, .. })
    ));
    assert!(matches!(
        momentum::bulk::relative_strength_index(&prices, SMA, 0),
        Err(Error::InvalidPeriod { period: 0, .. })
    ));
    assert!(matches!(
        volatility::bulk::ulcer_index(&prices, 0),
        Err(Error::InvalidPeriod { period: 0, .. })
    ));
}

#[test]
fn validation_period_longer_than_data_is_empty() {
    let prices = [100.2_f64, 100.46, 100.53];
    let result = moving_average::bulk::moving_average(&prices, MovingAverageType::Simple, 10);
    assert_eq!(result, Ok(Vec::new()));
    assert_eq!(momentum::bulk::chande_momentum_oscillator(&prices, 10), Ok(Vec::new()));
}

#[test]
fn validation_inverted_short_long_periods() {
    let prices = [100.46_f64, 100.53, 100.38, 100.19, 100.21, 100.32, 100.28];
    assert!(matches!(
        momentum::bulk::macd_line(&prices, 5, EMA, 3, EMA),
        Err(Error::InvalidPeriod { period: 5, .. })
    ));
    assert!(matches!(
        momentum::bulk::percentage_price_oscillator(&prices, 4, 4, EMA),
        Err(Error::InvalidPeriod { period: 4, .. })
    ));
}

#[test]
fn validation_aroon_period_of_one() {
    let highs = [1.0_f64, 2.0, 3.0];
    assert!(matches!(
        trend::bulk::aroon_up(&highs, 1),
        Err(Error::InvalidPeriod { period: 1, .. })
    ));
}

// ==================== Length Mismatch Tests ====================

#[test]
fn validation_mismatched_series() {
    let long = [1.0_f64, 2.0, 3.0, 4.0];
    let short = [1.0_f64, 2.0, 3.0];
    assert!(matches!(
        momentum::bulk::money_flow_index(&long, &short, 2),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        other::bulk::true_range(&long, &long, &short),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        strength::bulk::accumulation_distribution(&long, &long, &short, &long, 0.0),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        correlation::bulk::correlate_asset_prices(
            &long,
            &short,
            SMA,
            DeviationModel::StandardDeviation,
            2
        ),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        candle::single::donchian_channels(&long, &short),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn validation_volume_price_trend_needs_one_volume_per_change() {
    let prices = [100.55_f64, 99.01, 100.43, 101.0, 101.76];
    let same_length = [743.0_f64, 1074.0, 861.0, 966.0, 1000.0];
    assert!(matches!(
        trend::bulk::volume_price_trend(&prices, &same_length, 0.0),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(trend::bulk::volume_price_trend(&prices, &same_length[..4], 0.0).is_ok());
}

// ==================== Insufficient Data Tests ====================

#[test]
fn validation_fixed_window_indicators() {
    let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
    assert!(matches!(
        standard::single::bollinger_bands(&prices),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        standard::single::macd(&prices),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        Bollinger::new().compute_window(&prices),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        Macd::new().compute_window(&prices),
        Err(Error::InsufficientData { .. })
    ));
}

#[test]
fn validation_directional_movement_needs_three_periods() {
    let (_, high, low, close, _) = generate_ohlcv(8);
    assert!(matches!(
        trend::bulk::directional_movement_system(&high, &low, &close, 3, SMA),
        Err(Error::InsufficientData { required: 9, actual: 8, .. })
    ));
}

#[test]
fn validation_ichimoku_needs_longest_period() {
    let (_, high, low, close, _) = generate_ohlcv(20);
    assert!(matches!(
        candle::single::ichimoku_cloud(&high, &low, &close, 9, 26, 52),
        Err(Error::InsufficientData { required: 52, actual: 20, .. })
    ));
}

#[test]
fn validation_chart_trends_need_points() {
    assert!(matches!(
        overall_trend(&[100.0_f64]),
        Err(Error::InsufficientData { required: 2, actual: 1, .. })
    ));
    assert!(matches!(
        peak_trend(&[1.0_f64, 2.0, 3.0], 3),
        Err(Error::InsufficientData { required: 2, actual: 1, .. })
    ));
    assert!(matches!(
        peaks(&[1.0_f64, 2.0, 3.0], 4, 1),
        Err(Error::InvalidPeriod { period: 4, .. })
    ));
    assert!(matches!(
        TrendBreakConfig::new().compute(&[1.0_f64, 2.0]),
        Err(Error::InsufficientData { required: 3, actual: 2, .. })
    ));
}

// ==================== Parameter Tests ====================

#[test]
fn validation_parabolic_sar_factors() {
    let highs = [100.64_f64, 102.39, 101.51];
    let lows = [95.92_f64, 96.77, 95.84];
    assert!(matches!(
        ParabolicSar::new().af_start(-0.02).compute(&highs, &lows),
        Err(Error::InvalidParameter { name: "af_start", .. })
    ));
    assert!(matches!(
        ParabolicSar::new().af_max(0.01).compute(&highs, &lows),
        Err(Error::InvalidParameter { name: "af_max", .. })
    ));
}

#[test]
fn validation_trend_break_thresholds() {
    let config = TrendBreakConfig::new().rmse_multiplier(3.0, 2.0);
    assert!(matches!(
        config.validate(),
        Err(Error::InvalidParameter { name: "hard_rmse_multiplier", .. })
    ));
}

#[test]
fn validation_batch_propagates_errors() {
    let processor = BatchProcessor::new();
    let sma = |prices: &[f64]| standard::bulk::simple_moving_average(prices, 2);

    let good = vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0]];
    assert_eq!(processor.process(&good, sma), Ok(vec![vec![1.5, 2.5], vec![4.5]]));

    let with_empty = vec![vec![1.0_f64, 2.0, 3.0], vec![]];
    assert_eq!(processor.process(&with_empty, sma), Err(Error::EmptyInput));
}
