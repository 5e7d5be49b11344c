//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n data points.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    traits::Indicator,
    utils,
};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the SMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// Number of samples averaged per window.
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA\[i\] = (P\[i-n+1\] + ... + P\[i\]) / n
///
/// One value per complete window: the output has `len - n + 1` values and
/// starts at source index `n - 1`. Fewer than `n` prices give an empty
/// output.
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Input = [T];
    type Output = IndicatorSeries<T>;
    type Config = SmaConfig;

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
        self.config.period
    }

    fn calculate(&self, prices: &[T]) -> Result<Self::Output> {
        let period = IndicatorError::check_period("period", self.config.period)?;
        let start = period - 1;

        if prices.len() < period {
            trace!(
                indicator = "sma",
                len = prices.len(),
                required = period,
                "insufficient data",
            );
            return Ok(IndicatorSeries::empty(start));
        }

        Ok(IndicatorSeries::new(start, utils::sma(prices, period)))
    }
}

/// Simple moving average of `prices` over `period` samples.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::sma;
///
/// let result = sma(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 4.0]);
/// assert_eq!(result.start(), 2);
/// ```
pub fn sma<T: TaFloat>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    Sma::new(SmaConfig::new(period)).calculate(prices)
}
