//! Shared test utilities for fast-ti integration tests.

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts two series match element-wise within `eps`.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64, label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: output length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e, eps), "{label}[{i}] expected {e}, got {a}");
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Deterministic OHLCV bars used by property and validation tests.
#[allow(dead_code)]
pub fn generate_ohlcv(size: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut open = Vec::with_capacity(size);
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);
    let mut close = Vec::with_capacity(size);
    let mut volume = Vec::with_capacity(size);

    let mut price = 100.0;
    for i in 0..size {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64;
        price += (x * 0.1).sin() * 2.0 + (x * 0.03).cos() * 1.5;
        price = price.max(10.0);

        open.push(price + (x * 0.04).sin() * 0.3);
        high.push(price + 1.0 + (x * 0.07).sin().abs());
        low.push(price - 1.0 - (x * 0.05).cos().abs());
        close.push(price + (x * 0.02).sin() * 0.8);
        volume.push(1_000.0 + ((x * 1.3).sin() * 500.0).abs());
    }

    (open, high, low, close, volume)
}
