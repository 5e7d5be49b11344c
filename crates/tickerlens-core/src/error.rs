//! Error types for indicator configuration and frame assembly.
//!
//! Too little input data is never an error: indicators return an empty
//! series instead. Errors are reserved for parameters that make a
//! computation meaningless.

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur when configuring or combining indicators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A period parameter was zero.
    #[error("Invalid period '{name}': {value} (must be > 0)")]
    InvalidPeriod {
        /// Name of the period parameter.
        name: &'static str,
        /// Provided value.
        value: usize,
    },

    /// A parameter value is outside its accepted range.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of the accepted range.
        expected: &'static str,
    },

    /// A series reaches past the end of the source it is aligned against.
    #[error("Series length mismatch: expected at most {expected}, got {actual}")]
    LengthMismatch {
        /// Source length.
        expected: usize,
        /// Exclusive end index of the offending series.
        actual: usize,
    },

    /// A frame column with this name already exists.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),
}

impl IndicatorError {
    /// Reject a zero period, passing any other value through.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] when `value` is zero.
    pub fn check_period(name: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            Err(Self::InvalidPeriod { name, value })
        } else {
            Ok(value)
        }
    }
}
