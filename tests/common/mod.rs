//! Common test utilities for tickerlens.
//!
//! Float assertions and deterministic synthetic price generators.

#![allow(dead_code)]

use tickerlens::prelude::{NaiveDate, PriceBar, PriceSeries};

/// Tiered float comparison: absolute near zero, relative otherwise.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    assert!(!actual.is_nan(), "{}: got NaN, expected {}", context, expected);

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{}[{}]", name, i));
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Generate constant price series.
pub fn generate_constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Generate linear price series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Generate a step series: each level held for `hold` samples.
pub fn generate_steps(levels: &[f64], hold: usize) -> Vec<f64> {
    levels
        .iter()
        .flat_map(|&level| std::iter::repeat(level).take(hold))
        .collect()
}

/// Generate sine wave price series.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Generate random walk price series with deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    // Simple LCG for deterministic random numbers
    let mut rng_state = seed;
    let mut next = || {
        rng_state = rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        // Convert to [-1, 1]
        (rng_state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

/// Build consecutive daily bars around `close`, starting 2024-01-01.
///
/// Open is the previous close; high and low extend `range_pct` of the close
/// beyond the open/close body.
pub fn bars_from_closes(close: &[f64], range_pct: f64) -> PriceSeries<f64> {
    let days = NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid date")
        .iter_days();

    close
        .iter()
        .enumerate()
        .zip(days)
        .map(|((i, &c), date)| {
            let o = if i == 0 { c } else { close[i - 1] };
            let range = c * range_pct;
            let high = c.max(o) + range * 0.5;
            let low = c.min(o) - range * 0.5;
            PriceBar::new(date, o, high, low, c, 1_000 + i as u64 * 100)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(f64::NAN, 1.0, 1e-10, "test");
    }

    #[test]
    fn test_generate_steps() {
        assert_eq!(generate_steps(&[1.0, 2.0], 2), vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        let data1 = generate_random_walk(100.0, 1.0, 10, 12345);
        let data2 = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(data1, data2);
        assert_eq!(data1[0], 100.0);
    }
}
