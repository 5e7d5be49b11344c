//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator that shows the relationship
//! between two exponential moving averages of prices.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    traits::Indicator,
};
use tracing::trace;

use super::ema::{ema, ema_aligned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdConfig {
    /// Fast EMA period (default: 12).
    pub fast: usize,
    /// Slow EMA period (default: 26).
    pub slow: usize,
    /// Signal line EMA period (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Set the signal line period.
    pub fn with_signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }

    /// Reject zero periods and a fast period that is not shorter than the
    /// slow one.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] or [`IndicatorError::InvalidParameter`].
    pub fn validate(&self) -> Result<()> {
        IndicatorError::check_period("fast", self.fast)?;
        IndicatorError::check_period("slow", self.slow)?;
        IndicatorError::check_period("signal", self.signal)?;
        if self.fast >= self.slow {
            return Err(IndicatorError::InvalidParameter {
                name: "fast",
                value: format!("{} (slow = {})", self.fast, self.slow),
                expected: "fast < slow",
            });
        }
        Ok(())
    }
}

/// Output of the MACD indicator.
///
/// All three lines are aligned to the input prices:
///
/// - `macd` starts at `slow - 1` and has one value per slow EMA value.
/// - `signal` and `histogram` start at `slow - 1 + signal - 1`.
///
/// `histogram` is `macd - signal` taken at the same source index, so its last
/// value is always `macd.last() - signal.last()`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdOutput<T: TaFloat> {
    /// MACD line (fast EMA - slow EMA).
    pub macd: IndicatorSeries<T>,
    /// Signal line (EMA of MACD line).
    pub signal: IndicatorSeries<T>,
    /// Histogram (MACD - Signal).
    pub histogram: IndicatorSeries<T>,
}

/// MACD indicator.
///
/// # Formula
///
/// MACD Line = EMA(fast) - EMA(slow)
///
/// Signal Line = EMA(MACD Line, signal)
///
/// Histogram = MACD Line - Signal Line
///
/// The fast EMA starts `slow - fast` samples before the slow one; the two
/// are paired by source index, not by position.
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Input = [T];
    type Output = MacdOutput<T>;
    type Config = MacdConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config
            .slow
            .saturating_add(self.config.signal)
            .saturating_sub(1)
    }

    fn calculate(&self, prices: &[T]) -> Result<Self::Output> {
        self.config.validate()?;

        if prices.len() < self.min_periods() {
            trace!(
                indicator = "macd",
                len = prices.len(),
                required = self.min_periods(),
                "insufficient data for signal line",
            );
        }

        let fast = ema(prices, self.config.fast)?;
        let slow = ema(prices, self.config.slow)?;

        let macd = fast.zip_with(&slow, |f, s| f - s);
        let signal = ema_aligned(&macd, self.config.signal)?;
        let histogram = macd.zip_with(&signal, |m, s| m - s);

        Ok(MacdOutput {
            macd,
            signal,
            histogram,
        })
    }
}

/// MACD of `prices` with the given fast, slow and signal periods.
///
/// # Errors
///
/// Returns an error if any period is zero or `fast >= slow`.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::macd;
///
/// let prices: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i)).collect();
/// let out = macd(&prices, 12, 26, 9).unwrap();
///
/// assert_eq!(out.macd.start(), 25);
/// assert_eq!(out.signal.start(), 33);
/// assert_eq!(out.histogram.len(), out.signal.len());
/// ```
pub fn macd<T: TaFloat>(
    prices: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput<T>> {
    Macd::new(MacdConfig::new(fast, slow, signal)).calculate(prices)
}
