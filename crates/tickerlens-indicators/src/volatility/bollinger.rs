//! Bollinger Bands indicator.
//!
//! Bollinger Bands consist of a middle band (SMA) with upper and lower bands
//! at a configurable number of standard deviations.

use core::marker::PhantomData;

use tickerlens_core::{
    aligned::IndicatorSeries,
    error::{IndicatorError, Result},
    num::TaFloat,
    series::Series,
    traits::Indicator,
    utils::{rolling_std, sma},
};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerConfig {
    /// The lookback period (default: 20).
    pub period: usize,
    /// Standard deviation multiplier (default: 2.0).
    pub num_std: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            num_std: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new configuration.
    pub fn new(period: usize, num_std: f64) -> Self {
        Self { period, num_std }
    }

    /// Set the standard deviation multiplier.
    pub fn with_num_std(mut self, num_std: f64) -> Self {
        self.num_std = num_std;
        self
    }
}

/// Output of Bollinger Bands. All three bands share the SMA's start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerOutput<T: TaFloat> {
    /// Upper band (SMA + num_std * std).
    pub upper: IndicatorSeries<T>,
    /// Middle band (SMA).
    pub middle: IndicatorSeries<T>,
    /// Lower band (SMA - num_std * std).
    pub lower: IndicatorSeries<T>,
}

/// Bollinger Bands indicator.
///
/// # Formula
///
/// Middle = SMA(close, n)
///
/// Upper = Middle + k * StdDev(close, n)
///
/// Lower = Middle - k * StdDev(close, n)
///
/// The deviation is the population deviation of each window (divides by `n`).
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Input = [T];
    type Output = BollingerOutput<T>;
    type Config = BollingerConfig;

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
        let num_std = self.config.num_std;
        if !num_std.is_finite() || num_std < 0.0 {
            return Err(IndicatorError::InvalidParameter {
                name: "num_std",
                value: num_std.to_string(),
                expected: "a finite value >= 0",
            });
        }

        let start = period - 1;
        if prices.len() < period {
            trace!(
                indicator = "bollinger",
                len = prices.len(),
                required = period,
                "insufficient data",
            );
            return Ok(BollingerOutput {
                upper: IndicatorSeries::empty(start),
                middle: IndicatorSeries::empty(start),
                lower: IndicatorSeries::empty(start),
            });
        }

        let multiplier = <T as TaFloat>::from_f64_lossy(num_std);
        let middle = sma(prices, period);
        let std = rolling_std(prices, period);

        let (upper, lower): (Series<T>, Series<T>) = middle
            .iter()
            .zip(std.iter())
            .map(|(&m, &sd)| {
                let width = multiplier * sd;
                (m + width, m - width)
            })
            .unzip();

        Ok(BollingerOutput {
            upper: IndicatorSeries::new(start, upper),
            middle: IndicatorSeries::new(start, middle),
            lower: IndicatorSeries::new(start, lower),
        })
    }
}

/// Bollinger Bands of `prices` with the given `period` and deviation
/// multiplier.
///
/// # Errors
///
/// Returns an error if `period` is zero or `num_std` is negative or not
/// finite.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::bollinger_bands;
///
/// let bands = bollinger_bands(&[2.0f64, 4.0, 4.0, 6.0], 4, 2.0).unwrap();
/// assert_eq!(bands.middle.as_slice(), &[4.0]);
/// ```
pub fn bollinger_bands<T: TaFloat>(
    prices: &[T],
    period: usize,
    num_std: f64,
) -> Result<BollingerOutput<T>> {
    BollingerBands::new(BollingerConfig::new(period, num_std)).calculate(prices)
}
