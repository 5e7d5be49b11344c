//! Prelude module for convenient imports.
//!
//! ```rust
//! use tickerlens_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! assert!(series.is_empty());
//! ```

// Core types
pub use crate::aligned::IndicatorSeries;
pub use crate::frame::{AlignedFrame, FrameRow};
pub use crate::num::TaFloat;
pub use crate::price::{PriceBar, PriceSeries};
pub use crate::series::Series;
pub use chrono::NaiveDate;

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig};

// Window primitives that do not clash with the indicator functions
pub use crate::utils::{
    gains_losses, mean, population_std, rolling_max, rolling_min, rolling_std, true_range,
    wilder_smooth,
};
