//! # tickerlens-core
//!
//! Core types for the tickerlens indicator engine.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Plain value container
//! - [`IndicatorSeries`] - Indicator output tagged with its source offset
//! - [`PriceBar`] and [`PriceSeries`] - Dated OHLCV price data
//! - [`AlignedFrame`] - Indicator outputs lined up by source row
//! - [`Indicator`] - Batch indicator trait
//! - [`utils`] - Compact window primitives (SMA, EMA, Wilder, rolling stats)
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use tickerlens_core::{utils, IndicatorSeries};
//!
//! let closes = [100.0f64, 101.5, 99.8, 102.3, 101.0];
//! let sma = IndicatorSeries::new(2, utils::sma(&closes, 3));
//! assert_eq!(sma.len(), 3);
//! assert_eq!(sma.end(), closes.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod aligned;
pub mod error;
pub mod frame;
pub mod num;
pub mod prelude;
pub mod price;
pub mod series;
pub mod traits;
pub mod utils;

pub use chrono::NaiveDate;

pub use aligned::IndicatorSeries;
pub use error::{IndicatorError, Result};
pub use frame::{AlignedFrame, FrameRow};
pub use num::TaFloat;
pub use price::{PriceBar, PriceSeries};
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig};
