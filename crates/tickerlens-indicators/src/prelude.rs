//! Prelude for tickerlens-indicators.
//!
//! This module re-exports all indicators, their configs and outputs, the
//! free functions, and the core types needed to call them.

pub use tickerlens_core::prelude::*;

// Momentum indicators
pub use crate::momentum::{
    rsi, stochastic, Rsi, RsiConfig, Stochastic, StochasticConfig, StochasticOutput,
};

// Trend indicators
pub use crate::trend::{
    ema, macd, sma, Ema, EmaConfig, Macd, MacdConfig, MacdOutput, Sma, SmaConfig,
};

// Volatility indicators
pub use crate::volatility::{
    atr, bollinger_bands, Atr, AtrConfig, AtrSmoothing, BollingerBands, BollingerConfig,
    BollingerOutput,
};

// Snapshot and classification
pub use crate::classify::{
    MacdBias, Momentum, RsiZone, SignalClassifier, SnapshotSignals, ThresholdClassifier,
    ThresholdConfig, TrendState,
};
pub use crate::snapshot::{current_indicators, IndicatorSnapshot, Snapshot, SnapshotConfig};
