//! # tickerlens
//!
//! Technical indicator engine for price-history dashboards.
//!
//! This crate re-exports the two workspace crates:
//!
//! - [`tickerlens_core`] - numeric types, price bars, aligned series and errors
//! - [`tickerlens_indicators`] - SMA, EMA, RSI, MACD, Bollinger Bands, ATR, Stochastic,
//!   the latest-value snapshot and its classification layer
//!
//! ## Feature Flags
//!
//! - `serde` (default in both crates) - serialization of configs, bars and
//!   outputs
//!
//! ## Example
//!
//! ```rust
//! use tickerlens::prelude::*;
//!
//! let closes: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i) * 0.5).collect();
//!
//! let sma20 = sma(&closes, 20).unwrap();
//! assert_eq!(sma20.start(), 19);
//!
//! let snapshot = current_indicators(&closes).unwrap().unwrap();
//! let signals = ThresholdClassifier::default().classify(&snapshot);
//! assert_eq!(signals.trend, TrendState::StrongUptrend);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use tickerlens_core;
pub use tickerlens_indicators;

/// Everything needed to compute and classify indicators.
pub mod prelude {
    pub use tickerlens_indicators::prelude::*;
}
