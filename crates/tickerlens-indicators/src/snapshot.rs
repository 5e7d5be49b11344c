//! Latest-value snapshot of the dashboard indicator set.
//!
//! A snapshot bundles the most recent SMA(20), SMA(50), EMA(12), EMA(26),
//! RSI(14) and MACD(12, 26, 9) values of one close series. Series shorter
//! than the configured minimum produce no snapshot at all rather than a
//! partially filled one.

use core::marker::PhantomData;

use tickerlens_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    traits::Indicator,
};
use tracing::debug;

use crate::momentum::rsi;
use crate::trend::{ema, sma, Macd, MacdConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Periods and minimum history for [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapshotConfig {
    /// Series shorter than this give no snapshot (default: 50).
    pub min_len: usize,
    /// Short SMA period (default: 20).
    pub sma_short: usize,
    /// Long SMA period (default: 50).
    pub sma_long: usize,
    /// Fast EMA period (default: 12).
    pub ema_fast: usize,
    /// Slow EMA period (default: 26).
    pub ema_slow: usize,
    /// RSI period (default: 14).
    pub rsi: usize,
    /// MACD periods (default: 12, 26, 9).
    pub macd: MacdConfig,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            min_len: 50,
            sma_short: 20,
            sma_long: 50,
            ema_fast: 12,
            ema_slow: 26,
            rsi: 14,
            macd: MacdConfig::default(),
        }
    }
}

impl SnapshotConfig {
    /// Set the minimum series length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set the short and long SMA periods.
    pub fn with_sma(mut self, short: usize, long: usize) -> Self {
        self.sma_short = short;
        self.sma_long = long;
        self
    }

    /// Set the fast and slow EMA periods.
    pub fn with_ema(mut self, fast: usize, slow: usize) -> Self {
        self.ema_fast = fast;
        self.ema_slow = slow;
        self
    }

    /// Set the RSI period.
    pub fn with_rsi(mut self, period: usize) -> Self {
        self.rsi = period;
        self
    }

    /// Set the MACD periods.
    pub fn with_macd(mut self, macd: MacdConfig) -> Self {
        self.macd = macd;
        self
    }

    /// Longest single period among the constituents.
    pub fn longest_period(&self) -> usize {
        [
            self.sma_short,
            self.sma_long,
            self.ema_fast,
            self.ema_slow,
            self.rsi,
            self.macd.slow,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Check every period and that `min_len` covers the longest one.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] for a zero period,
    /// [`IndicatorError::InvalidParameter`] for a bad MACD pair or a
    /// `min_len` below [`longest_period`](Self::longest_period).
    pub fn validate(&self) -> Result<()> {
        IndicatorError::check_period("sma_short", self.sma_short)?;
        IndicatorError::check_period("sma_long", self.sma_long)?;
        IndicatorError::check_period("ema_fast", self.ema_fast)?;
        IndicatorError::check_period("ema_slow", self.ema_slow)?;
        IndicatorError::check_period("rsi", self.rsi)?;
        self.macd.validate()?;

        let longest = self.longest_period();
        if self.min_len < longest {
            return Err(IndicatorError::InvalidParameter {
                name: "min_len",
                value: self.min_len.to_string(),
                expected: "at least the longest constituent period",
            });
        }
        Ok(())
    }
}

/// The latest value of each dashboard indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: TaFloat", rename_all = "camelCase")
)]
pub struct IndicatorSnapshot<T: TaFloat> {
    /// Last close.
    pub current_price: T,
    /// Short SMA.
    pub sma20: T,
    /// Long SMA.
    pub sma50: T,
    /// Fast EMA.
    pub ema12: T,
    /// Slow EMA.
    pub ema26: T,
    /// RSI.
    pub rsi: T,
    /// MACD line.
    pub macd: T,
    /// MACD signal line.
    pub macd_signal: T,
    /// MACD histogram.
    pub macd_histogram: T,
}

/// Snapshot aggregator.
///
/// `calculate` returns `Ok(None)` when the series is shorter than
/// `min_len`, or when any constituent series still comes out empty.
#[derive(Debug, Clone)]
pub struct Snapshot<T: TaFloat> {
    config: SnapshotConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Snapshot<T> {
    type Input = [T];
    type Output = Option<IndicatorSnapshot<T>>;
    type Config = SnapshotConfig;

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
        self.config.min_len
    }

    fn calculate(&self, prices: &[T]) -> Result<Self::Output> {
        let config = &self.config;
        config.validate()?;

        if prices.len() < config.min_len {
            debug!(
                len = prices.len(),
                required = config.min_len,
                "snapshot gate rejected series",
            );
            return Ok(None);
        }

        let sma_short = sma(prices, config.sma_short)?;
        let sma_long = sma(prices, config.sma_long)?;
        let ema_fast = ema(prices, config.ema_fast)?;
        let ema_slow = ema(prices, config.ema_slow)?;
        let rsi = rsi(prices, config.rsi)?;
        let macd = Macd::new(config.macd.clone()).calculate(prices)?;

        let snapshot = prices.last().copied().and_then(|current_price| {
            Some(IndicatorSnapshot {
                current_price,
                sma20: sma_short.last()?,
                sma50: sma_long.last()?,
                ema12: ema_fast.last()?,
                ema26: ema_slow.last()?,
                rsi: rsi.last()?,
                macd: macd.macd.last()?,
                macd_signal: macd.signal.last()?,
                macd_histogram: macd.histogram.last()?,
            })
        });

        if snapshot.is_none() {
            debug!(len = prices.len(), "snapshot constituent series under-ran");
        }
        Ok(snapshot)
    }
}

/// Snapshot of the latest dashboard indicators with the default periods.
///
/// Returns `Ok(None)` for fewer than 50 prices.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` matches the
/// rest of the function surface.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::current_indicators;
///
/// assert!(current_indicators(&[100.0f64; 49]).unwrap().is_none());
///
/// let snapshot = current_indicators(&[100.0f64; 50]).unwrap().unwrap();
/// assert_eq!(snapshot.sma50, 100.0);
/// ```
pub fn current_indicators<T: TaFloat>(prices: &[T]) -> Result<Option<IndicatorSnapshot<T>>> {
    Snapshot::new(SnapshotConfig::default()).calculate(prices)
}
