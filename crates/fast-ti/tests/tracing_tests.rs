//! Runs the stateful indicators under a `tracing` subscriber.
//!
//! Each test installs a thread-local subscriber that writes into a buffer,
//! then checks both the numeric result and the diagnostic events
//! (stop-and-reverse, trend segment closes, batch dispatch).

#![allow(clippy::unreadable_literal)]

mod common;

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use common::{assert_series_eq, generate_ohlcv, EPSILON};
use fast_ti::batch::BatchProcessor;
use fast_ti::chart_trends::{break_down_trends, TrendBreakConfig};
use fast_ti::indicators::trend::{ParabolicSar, Position};
use fast_ti::indicators::{standard, volatility};
use fast_ti::ConstantModelType;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a `fast_ti=trace` subscriber and returns its result with the captured output.
fn traced<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fast_ti=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn traced_parabolic_sar_reverses() {
    let highs = [100.64_f64, 102.39, 101.51, 99.48, 96.93];
    let lows = [95.92_f64, 96.77, 95.84, 91.22, 89.12];
    let (sar, logs) =
        traced(|| ParabolicSar::new().position(Position::Long).compute(&highs, &lows).unwrap());
    assert_series_eq(
        &sar,
        &[95.92, 95.92, 102.39, 101.9432, 101.17380800000001],
        1e-9,
        "parabolic sar",
    );
    assert!(logs.contains("parabolic sar stop and reverse"), "missing reversal event:\n{logs}");
    assert!(logs.contains("position=Short"), "missing reversal position:\n{logs}");
    assert!(logs.contains("fast_ti::indicators::trend"), "missing event target:\n{logs}");
}

#[test]
fn traced_trend_breakdown() {
    let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
    let (segments, logs) =
        traced(|| break_down_trends(&prices, &TrendBreakConfig::default()).unwrap());
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[1].start, segments[1].end), (2, 4));
    assert!(logs.contains("trend segment closed"), "missing segment event:\n{logs}");
    assert!(logs.contains("start=0"), "missing segment start:\n{logs}");
    assert!(logs.contains("fast_ti::chart_trends"), "missing event target:\n{logs}");
}

#[test]
fn traced_volatility_system_runs_over_long_series() {
    let (_, high, low, close, _) = generate_ohlcv(200);
    let (stops, _) = traced(|| {
        volatility::bulk::volatility_system(
            &high,
            &low,
            &close,
            14,
            3.0,
            ConstantModelType::SmoothedMovingAverage,
        )
        .unwrap()
    });
    assert_eq!(stops.len(), 200 - 14 + 1);
    assert!(stops.iter().all(|s| s.is_finite()));
}

#[test]
fn traced_batch_matches_sequential() {
    let series: Vec<Vec<f64>> = (0..100_usize)
        .map(|n| generate_ohlcv(30 + n % 5).3)
        .collect();
    let processor = BatchProcessor::new().min_parallel_threshold(10);
    let (batched, logs) = traced(|| {
        processor
            .process(&series, |prices| standard::bulk::exponential_moving_average(prices, 10))
            .unwrap()
    });
    for (prices, result) in series.iter().zip(&batched) {
        let expected = standard::bulk::exponential_moving_average(prices, 10).unwrap();
        assert_series_eq(result, &expected, EPSILON, "batched ema");
    }
    assert!(logs.contains("batch evaluation"), "missing batch event:\n{logs}");
    assert!(logs.contains("series=100"), "missing series count:\n{logs}");
}

#[test]
fn untraced_target_is_filtered_out() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fast_ti=info"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let prices = [100.2_f64, 100.46, 100.53, 100.38, 100.19];
    tracing::subscriber::with_default(subscriber, || {
        break_down_trends(&prices, &TrendBreakConfig::default()).unwrap()
    });
    assert!(logs.contents().is_empty(), "unexpected events:\n{}", logs.contents());
}
