//! Error types for range handling in lumen-types.

use thiserror::Error;

/// Errors that can occur when building or checking a value range.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    #[error("Invalid range: min {min} is greater than max {max}")]
    Inverted {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// An illuminance range must start at 1 lux or above.
    #[error("Invalid lux range: minimum {0} must be at least 1")]
    NonPositiveLuxMinimum(i64),

    /// A value fell outside of the range it was checked against.
    #[error("Value {value} is outside of range {min}..={max}")]
    OutOfRange {
        /// The offending value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
}

/// Result type alias using lumen-types' RangeError type.
pub type RangeResult<T> = std::result::Result<T, RangeError>;
