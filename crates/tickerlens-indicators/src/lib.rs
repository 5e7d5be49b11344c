//! # tickerlens-indicators
//!
//! Technical indicators for the tickerlens engine.
//!
//! Indicators are organized into three categories:
//!
//! - **Trend**: SMA, EMA, MACD
//! - **Momentum**: RSI, Stochastic Oscillator
//! - **Volatility**: Bollinger Bands, ATR
//!
//! On top of those, [`snapshot`] bundles the latest value of the dashboard
//! set and [`classify`] turns a snapshot into display labels.
//!
//! Every indicator returns an [`IndicatorSeries`](tickerlens_core::IndicatorSeries)
//! that records where in the input its first value belongs. Too little input
//! gives an empty series, never an error.
//!
//! # Example
//!
//! ```
//! use tickerlens_indicators::prelude::*;
//!
//! let closes: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i % 7)).collect();
//!
//! let rsi = Rsi::<f64>::new(RsiConfig::default()).calculate(&closes).unwrap();
//! assert_eq!(rsi.start(), 14);
//! assert_eq!(rsi.end(), closes.len());
//!
//! let snapshot = current_indicators(&closes).unwrap().expect("60 closes is enough");
//! let signals = ThresholdClassifier::default().classify(&snapshot);
//! println!("RSI {:.2} ({})", snapshot.rsi, signals.rsi);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classify;
pub mod momentum;
pub mod snapshot;
pub mod trend;
pub mod volatility;

pub mod prelude;

pub use prelude::*;
