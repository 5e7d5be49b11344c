//! The trait every indicator implements.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::TaFloat;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// A batch indicator over a price history.
///
/// An indicator holds only its configuration. [`calculate`](Self::calculate)
/// is a pure function of the input, so one instance can be shared across
/// threads and reused for any number of symbols.
///
/// # Insufficient data
///
/// An input shorter than [`min_periods`](Self::min_periods) is not an error:
/// `calculate` returns `Ok` with an empty output. `Err` is reserved for
/// configurations that cannot produce meaningful output (for example a zero
/// period).
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Input = [T];
///     type Output = IndicatorSeries<T>;
///     type Config = SmaConfig;
///
///     fn new(config: SmaConfig) -> Self { /* ... */ }
///     fn config(&self) -> &SmaConfig { &self.config }
///     fn min_periods(&self) -> usize { self.config.period }
///     fn calculate(&self, prices: &[T]) -> Result<IndicatorSeries<T>> { /* ... */ }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// Input accepted by `calculate`: `[T]` for close-based indicators,
    /// [`PriceSeries<T>`](crate::price::PriceSeries) for indicators that
    /// need highs and lows.
    type Input: ?Sized;

    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Minimum input length for a non-empty output.
    fn min_periods(&self) -> usize;

    /// Perform batch calculation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn calculate(&self, input: &Self::Input) -> Result<Self::Output>;
}
