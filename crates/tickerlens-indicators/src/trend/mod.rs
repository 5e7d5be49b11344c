//! Trend indicators.
//!
//! This module contains trend-following indicators:
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod ema;
mod macd;
mod sma;

pub(crate) use ema::ema_aligned;

pub use ema::{ema, Ema, EmaConfig};
pub use macd::{macd, Macd, MacdConfig, MacdOutput};
pub use sma::{sma, Sma, SmaConfig};
