//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA gives more weight to recent prices using an exponential
//! smoothing factor.

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

/// Configuration for the EMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// The period of the EMA.
    pub period: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Exponential Moving Average indicator.
///
/// # Formula
///
/// k = 2 / (n + 1)
///
/// EMA\[0\] = SMA of the first n prices
///
/// EMA\[t\] = P\[t\] * k + EMA\[t-1\] * (1 - k)
///
/// The recurrence runs over every remaining price, so the EMA never forgets
/// the start of the series. Output length is `len - n + 1`, starting at
/// source index `n - 1`, the same as the SMA.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Ema<T> {
    /// Smoothing constant `2 / (period + 1)`.
    pub fn smoothing(&self) -> T {
        T::TWO / <T as TaFloat>::from_usize(self.config.period.saturating_add(1))
    }
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Input = [T];
    type Output = IndicatorSeries<T>;
    type Config = EmaConfig;

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
                indicator = "ema",
                len = prices.len(),
                required = period,
                "insufficient data",
            );
            return Ok(IndicatorSeries::empty(start));
        }

        Ok(IndicatorSeries::new(start, utils::ema(prices, period)))
    }
}

/// Exponential moving average of `prices` with the given `period`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero.
pub fn ema<T: TaFloat>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    Ema::new(EmaConfig::new(period)).calculate(prices)
}

/// EMA of an already-aligned series; the result keeps the source offset.
pub(crate) fn ema_aligned<T: TaFloat>(
    series: &IndicatorSeries<T>,
    period: usize,
) -> Result<IndicatorSeries<T>> {
    let inner = ema(series.as_slice(), period)?;
    Ok(IndicatorSeries::new(
        series.start().saturating_add(inner.start()),
        inner.into_values(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tickerlens_core::series::Series;

    #[test]
    fn test_ema_default_config() {
        assert_eq!(EmaConfig::default().period, 14);
    }

    #[test]
    fn test_ema_smoothing_constant() {
        let ema = Ema::<f64>::new(EmaConfig::new(12));
        assert_relative_eq!(ema.smoothing(), 2.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ema_calculate() {
        let result = ema(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.start(), 2);
        assert_eq!(result.get(0), Some(2.0)); // seed SMA

        // k = 2/(3+1) = 0.5
        // ema[3] = 0.5 * 4 + 0.5 * 2 = 3
        assert_relative_eq!(result.at(3).unwrap(), 3.0, epsilon = 1e-10);
        // ema[4] = 0.5 * 5 + 0.5 * 3 = 4
        assert_relative_eq!(result.at(4).unwrap(), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_ema_remembers_whole_history() {
        // A spike leaves a trace long after it has left any SMA window.
        let mut prices = vec![10.0f64; 30];
        prices[5] = 100.0;

        let result = ema(&prices, 3).unwrap();
        assert!(result.last().unwrap() > 10.0);
        let sma_last = crate::trend::sma(&prices, 3).unwrap().last().unwrap();
        assert_relative_eq!(sma_last, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ema_insufficient_data_is_empty() {
        let result = ema(&[1.0f64, 2.0], 3).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.start(), 2);
    }

    #[test]
    fn test_ema_constant_input() {
        let result = ema(&[42.0f64; 30], 5).unwrap();
        for &val in result.as_slice() {
            assert_relative_eq!(val, 42.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ema_aligned_offsets_compose() {
        let base = IndicatorSeries::new(4, Series::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]));
        let smoothed = ema_aligned(&base, 2).unwrap();

        assert_eq!(smoothed.start(), 5);
        assert_eq!(smoothed.end(), base.end());
        assert_eq!(smoothed.get(0), Some(1.5));
    }

    #[test]
    fn test_ema_invalid_period() {
        assert!(ema(&[1.0f64], 0).is_err());
    }

    #[test]
    fn test_ema_huge_period_is_empty() {
        let result = ema(&[1.0f64, 2.0], usize::MAX).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.start(), usize::MAX - 1);

        let base = IndicatorSeries::new(3, Series::from_vec(vec![1.0f64, 2.0]));
        assert_eq!(ema_aligned(&base, usize::MAX).unwrap().start(), usize::MAX);
    }
}
