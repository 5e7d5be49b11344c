//! Presentation labels for a snapshot.
//!
//! Thresholds such as "RSI above 70 is overbought" are display policy, not
//! part of any indicator. They live behind [`SignalClassifier`] so a caller
//! can swap in its own rules without touching the numeric code.

use core::fmt;

use tickerlens_core::num::TaFloat;

use crate::snapshot::IndicatorSnapshot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the RSI sits relative to the classifier's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RsiZone {
    /// Above the overbought threshold.
    Overbought,
    /// Below the oversold threshold.
    Oversold,
    /// Between the thresholds, inclusive.
    Neutral,
}

/// Direction of the MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MacdBias {
    /// MACD above signal.
    Bullish,
    /// MACD at or below signal.
    Bearish,
}

/// Price position against the short and long SMAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrendState {
    /// price > short SMA > long SMA.
    StrongUptrend,
    /// price < short SMA < long SMA.
    StrongDowntrend,
    /// Anything else.
    Sideways,
}

/// Sign of the MACD histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Momentum {
    /// Histogram >= 0.
    Positive,
    /// Histogram < 0.
    Negative,
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Overbought => "Overbought",
            Self::Oversold => "Oversold",
            Self::Neutral => "Neutral",
        })
    }
}

impl fmt::Display for MacdBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
        })
    }
}

impl fmt::Display for TrendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StrongUptrend => "Strong Uptrend",
            Self::StrongDowntrend => "Strong Downtrend",
            Self::Sideways => "Sideways",
        })
    }
}

impl fmt::Display for Momentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        })
    }
}

/// All labels for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotSignals {
    /// RSI zone.
    pub rsi: RsiZone,
    /// MACD bias.
    pub macd: MacdBias,
    /// Trend state.
    pub trend: TrendState,
    /// Histogram momentum.
    pub momentum: Momentum,
}

/// Turns indicator values into display labels.
///
/// Implementors provide the four individual rules; [`classify`](Self::classify)
/// applies them to a whole snapshot.
pub trait SignalClassifier<T: TaFloat>: Send + Sync {
    /// Classify an RSI value.
    fn rsi_zone(&self, rsi: T) -> RsiZone;

    /// Classify the MACD line against its signal line.
    fn macd_bias(&self, macd: T, signal: T) -> MacdBias;

    /// Classify price against the short and long moving averages.
    fn trend(&self, price: T, sma_short: T, sma_long: T) -> TrendState;

    /// Classify the MACD histogram.
    fn momentum(&self, histogram: T) -> Momentum;

    /// Classify every field of a snapshot.
    fn classify(&self, snapshot: &IndicatorSnapshot<T>) -> SnapshotSignals {
        SnapshotSignals {
            rsi: self.rsi_zone(snapshot.rsi),
            macd: self.macd_bias(snapshot.macd, snapshot.macd_signal),
            trend: self.trend(snapshot.current_price, snapshot.sma20, snapshot.sma50),
            momentum: self.momentum(snapshot.macd_histogram),
        }
    }
}

/// RSI thresholds for [`ThresholdClassifier`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdConfig {
    /// RSI above this is overbought (default: 70).
    pub overbought: f64,
    /// RSI below this is oversold (default: 30).
    pub oversold: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl ThresholdConfig {
    /// Create a threshold pair.
    pub fn new(overbought: f64, oversold: f64) -> Self {
        Self {
            overbought,
            oversold,
        }
    }
}

/// Fixed-threshold classifier matching the usual dashboard conventions.
///
/// # Example
///
/// ```rust
/// use tickerlens_indicators::{RsiZone, SignalClassifier, ThresholdClassifier};
///
/// let classifier = ThresholdClassifier::default();
/// assert_eq!(classifier.rsi_zone(75.0f64), RsiZone::Overbought);
/// assert_eq!(classifier.rsi_zone(70.0f64), RsiZone::Neutral);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThresholdClassifier {
    config: ThresholdConfig,
}

impl ThresholdClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }
}

impl<T: TaFloat> SignalClassifier<T> for ThresholdClassifier {
    fn rsi_zone(&self, rsi: T) -> RsiZone {
        let rsi = rsi.to_f64_lossy();
        if rsi > self.config.overbought {
            RsiZone::Overbought
        } else if rsi < self.config.oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }

    fn macd_bias(&self, macd: T, signal: T) -> MacdBias {
        if macd > signal {
            MacdBias::Bullish
        } else {
            MacdBias::Bearish
        }
    }

    fn trend(&self, price: T, sma_short: T, sma_long: T) -> TrendState {
        if price > sma_short && sma_short > sma_long {
            TrendState::StrongUptrend
        } else if price < sma_short && sma_short < sma_long {
            TrendState::StrongDowntrend
        } else {
            TrendState::Sideways
        }
    }

    fn momentum(&self, histogram: T) -> Momentum {
        if histogram >= T::ZERO {
            Momentum::Positive
        } else {
            Momentum::Negative
        }
    }
}
