//! Inclusive value ranges for illuminance and encoded measured values.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};
use crate::protocol::{
    LIGHTSENSOR_MAX_VAL, LIGHTSENSOR_MIN_VAL, MEASURED_VALUE_MAX, MEASURED_VALUE_MIN,
};

/// Inclusive illuminance range in lux.
///
/// The lower bound must be at least 1 lux: clamping into this range is what
/// keeps `log10` away from zero and negative inputs.
///
/// ```
/// use lumen_types::LuxRange;
///
/// let range = LuxRange::default();
/// assert_eq!(range.clamp(0), 1);
/// assert_eq!(range.clamp(500), 500);
/// assert_eq!(range.clamp(i64::MAX), 3_576_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LuxRange {
    /// Lowest illuminance (lux).
    pub min: i64,
    /// Highest illuminance (lux).
    pub max: i64,
}

impl LuxRange {
    /// Create a validated illuminance range.
    pub fn new(min: i64, max: i64) -> RangeResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the range invariants.
    ///
    /// Needed after deserialization, which fills the fields directly.
    pub fn validate(&self) -> RangeResult<()> {
        if self.min < 1 {
            return Err(RangeError::NonPositiveLuxMinimum(self.min));
        }
        check_order(self.min, self.max)
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        clamp(value, self.min, self.max)
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for LuxRange {
    fn default() -> Self {
        Self {
            min: LIGHTSENSOR_MIN_VAL,
            max: LIGHTSENSOR_MAX_VAL,
        }
    }
}

impl fmt::Display for LuxRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} lx", self.min, self.max)
    }
}

/// Inclusive range of encoded measured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasuredRange {
    /// Lowest encoded value.
    pub min: i64,
    /// Highest encoded value.
    pub max: i64,
}

impl MeasuredRange {
    /// Create a validated measured-value range.
    pub fn new(min: i64, max: i64) -> RangeResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the range invariants.
    pub fn validate(&self) -> RangeResult<()> {
        check_order(self.min, self.max)
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        clamp(value, self.min, self.max)
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Return `value` unchanged if it is in range, or an error otherwise.
    pub fn check(&self, value: i64) -> RangeResult<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for MeasuredRange {
    fn default() -> Self {
        Self {
            min: MEASURED_VALUE_MIN,
            max: MEASURED_VALUE_MAX,
        }
    }
}

impl fmt::Display for MeasuredRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

fn check_order(min: i64, max: i64) -> RangeResult<()> {
    if min > max {
        Err(RangeError::Inverted { min, max })
    } else {
        Ok(())
    }
}

// Ord::clamp panics on an inverted range; deserialized ranges may not have
// been validated yet.
fn clamp(value: i64, min: i64, max: i64) -> i64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
