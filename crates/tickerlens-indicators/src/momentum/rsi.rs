//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    series::Series,
    traits::Indicator,
    utils::{gains_losses, mean, wilder_step},
};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
///
/// RSI = 100 - (100 / (1 + RS))
///
/// Averages are seeded with the plain mean of the first `n` gains and losses,
/// then Wilder-smoothed. When the average loss is zero RS is taken as 100, so
/// an unbroken rise reads about 99.01 rather than dividing by zero.
///
/// Needs `n + 1` prices; the output has `len - n` values starting at source
/// index `n`.
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Rsi<T> {
    fn rsi_from_averages(avg_gain: T, avg_loss: T) -> T {
        let rs = if avg_loss == T::ZERO {
            T::HUNDRED
        } else {
            avg_gain / avg_loss
        };
        T::HUNDRED - T::HUNDRED / (T::ONE + rs)
    }
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Input = [T];
    type Output = IndicatorSeries<T>;
    type Config = RsiConfig;

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
        self.config.period.saturating_add(1)
    }

    fn calculate(&self, prices: &[T]) -> Result<Self::Output> {
        let period = IndicatorError::check_period("period", self.config.period)?;

        if prices.len() <= period {
            trace!(
                indicator = "rsi",
                len = prices.len(),
                required = self.min_periods(),
                "insufficient data",
            );
            return Ok(IndicatorSeries::empty(period));
        }

        let (gains, losses) = gains_losses(prices);
        let gains = gains.as_slice();
        let losses = losses.as_slice();
        let n = <T as TaFloat>::from_usize(period);

        let mut avg_gain = mean(&gains[..period]);
        let mut avg_loss = mean(&losses[..period]);

        let mut values = Series::with_capacity(prices.len() - period);
        values.push(Self::rsi_from_averages(avg_gain, avg_loss));

        for (&gain, &loss) in gains[period..].iter().zip(&losses[period..]) {
            avg_gain = wilder_step(avg_gain, gain, n);
            avg_loss = wilder_step(avg_loss, loss, n);
            values.push(Self::rsi_from_averages(avg_gain, avg_loss));
        }

        Ok(IndicatorSeries::new(period, values))
    }
}

/// Relative strength index of `prices` with the given `period`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::rsi;
///
/// let prices: Vec<f64> = (0..20).map(f64::from).collect();
/// let result = rsi(&prices, 14).unwrap();
///
/// assert_eq!(result.len(), 6);
/// assert!(result.last().unwrap() > 99.0);
/// ```
pub fn rsi<T: TaFloat>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    Rsi::new(RsiConfig::new(period)).calculate(prices)
}
