//! Momentum indicators.
//!
//! This module contains momentum oscillators:
//! - RSI (Relative Strength Index)
//! - Stochastic Oscillator

mod rsi;
mod stochastic;

pub use rsi::{rsi, Rsi, RsiConfig};
pub use stochastic::{stochastic, Stochastic, StochasticConfig, StochasticOutput};
