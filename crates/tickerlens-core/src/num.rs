//! Numeric type abstractions for indicator computations.
//!
//! [`TaFloat`] abstracts over `f32` and `f64` so every indicator can be
//! computed at either precision from the same code.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bound carried by [`TaFloat`] when the `serde` feature is on.
#[cfg(feature = "serde")]
pub trait SerdeFloat: Serialize + DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T: Serialize + DeserializeOwned> SerdeFloat for T {}

/// Serialization bound carried by [`TaFloat`] when the `serde` feature is on.
#[cfg(not(feature = "serde"))]
pub trait SerdeFloat {}

#[cfg(not(feature = "serde"))]
impl<T> SerdeFloat for T {}

/// Floating-point type used for prices and indicator values.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::TaFloat;
///
/// fn midpoint<T: TaFloat>(high: T, low: T) -> T {
///     (high + low) / T::TWO
/// }
///
/// assert_eq!(midpoint(105.0f64, 95.0), 100.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + SerdeFloat + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Fifty value (oscillator midpoint).
    const FIFTY: Self;
    /// Hundred value (oscillator ceiling).
    const HUNDRED: Self;

    /// Convert from `f64`, rounding to the target precision.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert a count or period into this type.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// `true` when the value is neither NaN nor infinite.
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_literals() {
        assert_eq!(<f64 as TaFloat>::ZERO, 0.0);
        assert_eq!(<f64 as TaFloat>::HUNDRED, 100.0);
        assert_eq!(<f32 as TaFloat>::FIFTY, 50.0f32);
        assert!(<f32 as TaFloat>::NAN.is_nan());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f32::from_f64_lossy(42.5), 42.5f32);
        assert_eq!(42.5f32.to_f64_lossy(), 42.5);
        assert_eq!(<f64 as TaFloat>::from_usize(26), 26.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(101.25f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }
}
