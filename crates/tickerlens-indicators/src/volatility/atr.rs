//! Average True Range (ATR) indicator.
//!
//! ATR measures market volatility from the true range of each bar.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    price::PriceSeries,
    traits::Indicator,
    utils::{true_range, wilder_smooth},
};
use tracing::trace;

use crate::trend::ema_aligned;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the true range series is averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AtrSmoothing {
    /// EMA with `k = 2 / (n + 1)`, seeded with the mean of the first `n`
    /// true ranges.
    #[default]
    Ema,
    /// Wilder's recurrence `(prev * (n - 1) + tr) / n` with the same seed.
    Wilder,
}

/// Configuration for the ATR indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtrConfig {
    /// The lookback period (default: 14).
    pub period: usize,
    /// Averaging method (default: EMA).
    #[cfg_attr(feature = "serde", serde(default))]
    pub smoothing: AtrSmoothing,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self {
            period: 14,
            smoothing: AtrSmoothing::Ema,
        }
    }
}

impl AtrConfig {
    /// Create a new ATR configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Set the averaging method.
    pub fn with_smoothing(mut self, smoothing: AtrSmoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// Average True Range indicator.
///
/// # Formula
///
/// TR = max(High - Low, |High - Prev Close|, |Low - Prev Close|)
///
/// ATR = EMA(TR, n), or Wilder(TR, n) with [`AtrSmoothing::Wilder`]
///
/// The first bar has no previous close, so the true range starts at source
/// index 1 and the ATR at index `n`. Needs `n + 1` bars.
#[derive(Debug, Clone)]
pub struct Atr<T: TaFloat> {
    config: AtrConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Atr<T> {
    type Input = PriceSeries<T>;
    type Output = IndicatorSeries<T>;
    type Config = AtrConfig;

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

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let period = IndicatorError::check_period("period", self.config.period)?;

        if data.len() <= period {
            trace!(
                indicator = "atr",
                len = data.len(),
                required = self.min_periods(),
                "insufficient data",
            );
            return Ok(IndicatorSeries::empty(period));
        }

        let tr = IndicatorSeries::new(1, true_range(data.highs(), data.lows(), data.closes()));

        match self.config.smoothing {
            AtrSmoothing::Ema => ema_aligned(&tr, period),
            AtrSmoothing::Wilder => Ok(IndicatorSeries::new(
                period,
                wilder_smooth(tr.as_slice(), period),
            )),
        }
    }
}

/// EMA-smoothed average true range of `data` over `period` bars.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero.
pub fn atr<T: TaFloat>(data: &PriceSeries<T>, period: usize) -> Result<IndicatorSeries<T>> {
    Atr::new(AtrConfig::new(period)).calculate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tickerlens_core::{price::PriceBar, NaiveDate};

    fn bars(hlc: &[(f64, f64, f64)]) -> PriceSeries<f64> {
        let dates = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().iter_days();
        hlc.iter()
            .zip(dates)
            .map(|(&(h, l, c), date)| PriceBar::new(date, c, h, l, c, 500))
            .collect()
    }

    fn sample() -> PriceSeries<f64> {
        bars(&[
            (10.0, 8.0, 9.0),
            (12.0, 9.0, 11.0),  // TR 3
            (11.0, 7.0, 8.0),   // TR 4
            (13.0, 10.0, 12.0), // TR 5
            (12.0, 10.0, 10.0), // TR 2
        ])
    }

    #[test]
    fn test_atr_default_config() {
        let config = AtrConfig::default();
        assert_eq!(config.period, 14);
        assert_eq!(config.smoothing, AtrSmoothing::Ema);
    }

    #[test]
    fn test_atr_ema_hand_computed() {
        let result = atr(&sample(), 2).unwrap();

        // TR = [3, 4, 5, 2] from index 1; seed mean(3, 4) = 3.5 at index 2
        assert_eq!(result.start(), 2);
        assert_eq!(result.len(), 3);
        assert_relative_eq!(result.at(2).unwrap(), 3.5, epsilon = 1e-10);
        // k = 2/3: 5 * 2/3 + 3.5/3 = 4.5
        assert_relative_eq!(result.at(3).unwrap(), 4.5, epsilon = 1e-10);
        // 2 * 2/3 + 4.5/3 = 17/6
        assert_relative_eq!(result.at(4).unwrap(), 17.0 / 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_atr_wilder_hand_computed() {
        let config = AtrConfig::new(2).with_smoothing(AtrSmoothing::Wilder);
        let result = Atr::<f64>::new(config).calculate(&sample()).unwrap();

        assert_eq!(result.start(), 2);
        assert_eq!(result.len(), 3);
        assert_relative_eq!(result.at(2).unwrap(), 3.5, epsilon = 1e-10);
        // (3.5 + 5) / 2
        assert_relative_eq!(result.at(3).unwrap(), 4.25, epsilon = 1e-10);
        // (4.25 + 2) / 2
        assert_relative_eq!(result.at(4).unwrap(), 3.125, epsilon = 1e-10);
    }

    #[test]
    fn test_atr_length_rule() {
        // one shorter than the input, then the EMA length rule
        let data = sample();
        for period in 1..=4 {
            let result = atr(&data, period).unwrap();
            assert_eq!(result.len(), data.len() - 1 - period + 1);
            assert_eq!(result.end(), data.len());
        }
    }

    #[test]
    fn test_atr_insufficient_data() {
        let result = atr(&sample(), 4).unwrap();
        assert_eq!(result.len(), 1);

        let result = atr(&sample(), 5).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.start(), 5);
    }

    #[test]
    fn test_atr_invalid_period() {
        assert!(atr(&sample(), 0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_atr_config_smoothing_defaults_when_missing() {
        let config: AtrConfig = serde_json::from_str(r#"{"period": 10}"#).unwrap();
        assert_eq!(config, AtrConfig::new(10));

        let config: AtrConfig =
            serde_json::from_str(r#"{"period": 10, "smoothing": "wilder"}"#).unwrap();
        assert_eq!(config.smoothing, AtrSmoothing::Wilder);
    }

    #[test]
    fn test_atr_huge_period_is_empty() {
        for smoothing in [AtrSmoothing::Ema, AtrSmoothing::Wilder] {
            let config = AtrConfig::new(usize::MAX).with_smoothing(smoothing);
            let result = Atr::<f64>::new(config).calculate(&sample()).unwrap();
            assert!(result.is_empty());
            assert_eq!(result.start(), usize::MAX);
        }
    }
}
