//! Stochastic Oscillator indicator.
//!
//! The Stochastic Oscillator compares a closing price to its price range
//! over a given time period.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    price::PriceSeries,
    series::Series,
    traits::Indicator,
    utils::{rolling_max, rolling_min},
};
use tracing::trace;

use crate::trend::sma;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StochasticConfig {
    /// Lookback period for the high/low range (default: 14).
    pub period: usize,
    /// SMA period for %D (default: 3).
    pub d_period: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            period: 14,
            d_period: 3,
        }
    }
}

impl StochasticConfig {
    /// Create a new configuration with the default %D period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Set the %D smoothing period.
    pub fn with_d_period(mut self, d_period: usize) -> Self {
        self.d_period = d_period;
        self
    }
}

/// Stochastic Oscillator output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct StochasticOutput<T: TaFloat> {
    /// %K line (0-100), starting at source index `period - 1`.
    pub k: IndicatorSeries<T>,
    /// %D line (SMA of %K), starting at `period - 1 + d_period - 1`.
    pub d: IndicatorSeries<T>,
}

/// Stochastic Oscillator indicator.
///
/// # Formula
///
/// %K = 100 * (Close - Lowest Low) / (Highest High - Lowest Low)
///
/// %D = SMA(%K, d_period)
///
/// A window whose high equals its low has no defined position; %K is 50 for
/// such a window. The flat-window test is relative to the window high, so
/// assets priced far below one keep their real %K.
#[derive(Debug, Clone)]
pub struct Stochastic<T: TaFloat> {
    config: StochasticConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Stochastic<T> {
    fn calc_k(close: T, lowest: T, highest: T) -> T {
        let range = highest - lowest;
        if range.abs() <= highest.abs() * T::epsilon() {
            T::FIFTY
        } else {
            T::HUNDRED * (close - lowest) / range
        }
    }
}

impl<T: TaFloat> Indicator<T> for Stochastic<T> {
    type Input = PriceSeries<T>;
    type Output = StochasticOutput<T>;
    type Config = StochasticConfig;

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

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let period = IndicatorError::check_period("period", self.config.period)?;
        let d_period = IndicatorError::check_period("d_period", self.config.d_period)?;
        let k_start = period - 1;

        if data.len() < period {
            trace!(
                indicator = "stochastic",
                len = data.len(),
                required = period,
                "insufficient data",
            );
            return Ok(StochasticOutput {
                k: IndicatorSeries::empty(k_start),
                d: IndicatorSeries::empty(k_start.saturating_add(d_period - 1)),
            });
        }

        let highest = rolling_max(data.highs(), period);
        let lowest = rolling_min(data.lows(), period);
        let closes = &data.closes()[k_start..];

        let k_values: Series<T> = closes
            .iter()
            .zip(highest.iter().zip(lowest.iter()))
            .map(|(&close, (&hi, &lo))| Self::calc_k(close, lo, hi))
            .collect();

        let k = IndicatorSeries::new(k_start, k_values);
        let d_inner = sma(k.as_slice(), d_period)?;
        let d = IndicatorSeries::new(
            k_start.saturating_add(d_inner.start()),
            d_inner.into_values(),
        );

        Ok(StochasticOutput { k, d })
    }
}

/// Stochastic oscillator over `data` with a `period`-bar window and the
/// default 3-period %D.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero.
pub fn stochastic<T: TaFloat>(data: &PriceSeries<T>, period: usize) -> Result<StochasticOutput<T>> {
    Stochastic::new(StochasticConfig::new(period)).calculate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tickerlens_core::{price::PriceBar, NaiveDate};

    fn bars(hlc: &[(f64, f64, f64)]) -> PriceSeries<f64> {
        let dates = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().iter_days();
        hlc.iter()
            .zip(dates)
            .map(|(&(h, l, c), date)| PriceBar::new(date, c, h, l, c, 1_000))
            .collect()
    }

    #[test]
    fn test_stochastic_default_config() {
        let config = StochasticConfig::default();
        assert_eq!(config.period, 14);
        assert_eq!(config.d_period, 3);
    }

    #[test]
    fn test_stochastic_hand_computed() {
        let data = bars(&[
            (10.0, 8.0, 9.0),
            (12.0, 9.0, 11.0),
            (11.0, 7.0, 8.0),
            (13.0, 10.0, 12.0),
            (12.0, 10.0, 10.0),
        ]);
        let out = stochastic(&data, 3).unwrap();

        assert_eq!(out.k.start(), 2);
        assert_eq!(out.k.len(), 3);
        // window 0..=2: high 12, low 7, close 8 -> 20
        assert_relative_eq!(out.k.at(2).unwrap(), 20.0, epsilon = 1e-10);
        // window 1..=3: high 13, low 7, close 12 -> 5/6
        assert_relative_eq!(out.k.at(3).unwrap(), 500.0 / 6.0, epsilon = 1e-10);
        // window 2..=4: high 13, low 7, close 10 -> 50
        assert_relative_eq!(out.k.at(4).unwrap(), 50.0, epsilon = 1e-10);

        assert_eq!(out.d.start(), 4);
        assert_eq!(out.d.len(), 1);
        assert_relative_eq!(
            out.d.at(4).unwrap(),
            (20.0 + 500.0 / 6.0 + 50.0) / 3.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_stochastic_flat_window_is_midpoint() {
        let data = bars(&[(5.0, 5.0, 5.0); 6]);
        let out = stochastic(&data, 3).unwrap();

        assert!(out.k.as_slice().iter().all(|&k| k == 50.0));
        assert!(out.d.as_slice().iter().all(|&d| d == 50.0));
    }

    #[test]
    fn test_stochastic_custom_d_period() {
        let data = bars(&[(10.0, 8.0, 9.0); 10]);
        let out = Stochastic::new(StochasticConfig::new(4).with_d_period(5))
            .calculate(&data)
            .unwrap();

        assert_eq!(out.k.start(), 3);
        assert_eq!(out.d.start(), 7);
        assert_eq!(out.d.end(), data.len());
    }

    #[test]
    fn test_stochastic_insufficient_data() {
        let data = bars(&[(10.0, 8.0, 9.0); 2]);
        let out = stochastic(&data, 3).unwrap();

        assert!(out.k.is_empty());
        assert!(out.d.is_empty());
        assert_eq!(out.d.start(), 4);
    }

    #[test]
    fn test_stochastic_invalid_periods() {
        let data = bars(&[(10.0, 8.0, 9.0); 5]);
        assert!(stochastic(&data, 0).is_err());
        assert!(Stochastic::new(StochasticConfig::new(3).with_d_period(0))
            .calculate(&data)
            .is_err());
    }

    #[test]
    fn test_stochastic_tiny_prices_keep_real_range() {
        // sub-nanodollar token: range 5e-11 is real, not a flat window
        let data = bars(&[
            (1e-9, 1e-9, 1e-9),
            (1.025e-9, 1.025e-9, 1.025e-9),
            (1.05e-9, 1.05e-9, 1.05e-9),
        ]);
        let out = stochastic(&data, 3).unwrap();

        assert_eq!(out.k.len(), 1);
        assert_relative_eq!(out.k.last().unwrap(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_stochastic_huge_periods_are_empty() {
        let data = bars(&[(10.0, 8.0, 9.0); 5]);

        let out = stochastic(&data, usize::MAX).unwrap();
        assert!(out.k.is_empty());
        assert_eq!(out.k.start(), usize::MAX - 1);
        assert!(out.d.is_empty());

        let out = Stochastic::<f64>::new(StochasticConfig::new(3).with_d_period(usize::MAX))
            .calculate(&data)
            .unwrap();
        assert_eq!(out.k.len(), 3);
        assert!(out.d.is_empty());
        assert_eq!(out.d.start(), usize::MAX);
    }
}
