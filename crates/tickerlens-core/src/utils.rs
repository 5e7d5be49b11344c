//! Window primitives shared by the indicators.
//!
//! Every function here returns a *compact* series: one value per complete
//! window, with no NaN padding. An input shorter than the window, or a zero
//! window, yields an empty series. Callers attach the source offset.

use crate::num::TaFloat;
use crate::series::Series;

/// Arithmetic mean of a slice; NaN for an empty slice.
#[must_use]
pub fn mean<T: TaFloat>(values: &[T]) -> T {
    if values.is_empty() {
        return T::NAN;
    }
    let sum = values.iter().fold(T::ZERO, |acc, &x| acc + x);
    sum / <T as TaFloat>::from_usize(values.len())
}

/// Population standard deviation (divides by `len`, not `len - 1`).
#[must_use]
pub fn population_std<T: TaFloat>(values: &[T]) -> T {
    let m = mean(values);
    let sum_sq = values.iter().fold(T::ZERO, |acc, &x| {
        let d = x - m;
        acc + d * d
    });
    (sum_sq / <T as TaFloat>::from_usize(values.len())).sqrt()
}

/// Simple moving average.
///
/// Each window is summed independently, so a window of identical values
/// averages to exactly that value.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::utils::sma;
///
/// let result = sma(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 4.0]);
/// ```
#[must_use]
pub fn sma<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }
    data.windows(window).map(mean).collect()
}

/// Exponential moving average with `k = 2 / (window + 1)`.
///
/// Seeded with the mean of the first `window` values, then
/// `ema[t] = x[t] * k + ema[t - 1] * (1 - k)` over every remaining value.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::utils::ema;
///
/// // k = 0.5: seed 2.0, then 0.5*4 + 0.5*2 = 3.0, then 0.5*5 + 0.5*3 = 4.0
/// let result = ema(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 4.0]);
/// ```
#[must_use]
pub fn ema<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }

    let k = T::TWO / <T as TaFloat>::from_usize(window + 1);
    let one_minus_k = T::ONE - k;

    let mut value = mean(&data[..window]);
    let mut result = Series::with_capacity(data.len() - window + 1);
    result.push(value);

    for &x in &data[window..] {
        value = x * k + value * one_minus_k;
        result.push(value);
    }

    result
}

/// Wilder's smoothing: seeded with the window mean, then
/// `s[t] = (s[t - 1] * (window - 1) + x[t]) / window`.
#[must_use]
pub fn wilder_smooth<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }

    let n = <T as TaFloat>::from_usize(window);
    let mut value = mean(&data[..window]);
    let mut result = Series::with_capacity(data.len() - window + 1);
    result.push(value);

    for &x in &data[window..] {
        value = wilder_step(value, x, n);
        result.push(value);
    }

    result
}

/// One Wilder smoothing step with period `n`.
#[inline]
#[must_use]
pub fn wilder_step<T: TaFloat>(prev: T, value: T, n: T) -> T {
    (prev * (n - T::ONE) + value) / n
}

/// Rolling population standard deviation, as used by Bollinger Bands.
#[must_use]
pub fn rolling_std<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }
    data.windows(window).map(population_std).collect()
}

/// Rolling maximum.
#[must_use]
pub fn rolling_max<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }
    data.windows(window)
        .map(|w| w[1..].iter().fold(w[0], |acc, &x| acc.max(x)))
        .collect()
}

/// Rolling minimum.
#[must_use]
pub fn rolling_min<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::new();
    }
    data.windows(window)
        .map(|w| w[1..].iter().fold(w[0], |acc, &x| acc.min(x)))
        .collect()
}

/// True range for bars `1..len`.
///
/// `TR[i] = max(high[i] - low[i], |high[i] - close[i-1]|, |low[i] - close[i-1]|)`.
/// The first bar has no previous close and produces no value, so the result
/// has one value fewer than the shortest input and starts at source index 1.
#[must_use]
pub fn true_range<T: TaFloat>(high: &[T], low: &[T], close: &[T]) -> Series<T> {
    let len = high.len().min(low.len()).min(close.len());
    (1..len)
        .map(|i| {
            let prev_close = close[i - 1];
            let hl = high[i] - low[i];
            let hc = (high[i] - prev_close).abs();
            let lc = (low[i] - prev_close).abs();
            hl.max(hc).max(lc)
        })
        .collect()
}

/// Per-step gains and losses from consecutive differences.
///
/// `gain = max(x[i] - x[i-1], 0)`, `loss = max(x[i-1] - x[i], 0)`. Both
/// series start at source index 1.
#[must_use]
pub fn gains_losses<T: TaFloat>(data: &[T]) -> (Series<T>, Series<T>) {
    data.windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            if change > T::ZERO {
                (change, T::ZERO)
            } else {
                (T::ZERO, -change)
            }
        })
        .unzip()
}
