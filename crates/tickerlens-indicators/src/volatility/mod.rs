//! Volatility indicators.
//!
//! This module contains volatility measures:
//! - ATR (Average True Range)
//! - Bollinger Bands

mod atr;
mod bollinger;

pub use atr::{atr, Atr, AtrConfig, AtrSmoothing};
pub use bollinger::{bollinger_bands, BollingerBands, BollingerConfig, BollingerOutput};
