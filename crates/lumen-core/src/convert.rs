//! Conversion between lux and Illuminance Measurement `MeasuredValue` codes.
//!
//! The cluster encodes illuminance logarithmically:
//!
//! ```text
//! measured_value = round(10000 * log10(lux) + 1)
//! lux            = floor(10 ^ ((measured_value - 1) / 10000))
//! ```
//!
//! Because the code is an integer and decoding floors to whole lux, the
//! direct inverse can land one step above or below the code that best
//! reproduces a requested illuminance. [`IlluminanceConverter::find_measured_value`]
//! corrects this with a short forward walk over the (non-decreasing) decoded
//! values and returns a code whose decoded lux does not exceed the target.
//!
//! # Example
//!
//! ```
//! use lumen_core::IlluminanceConverter;
//! use lumen_core::convert::to_illuminance;
//!
//! let converter = IlluminanceConverter::default();
//!
//! let code = converter.find_measured_value(100);
//! assert_eq!(code, 20_001);
//! assert_eq!(to_illuminance(code), 100);
//!
//! // Out-of-range requests are clamped before searching.
//! assert_eq!(converter.find_measured_value(0), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lumen_types::protocol::LOG_SCALE;
use lumen_types::{LuxRange, MeasuredRange};

use crate::error::{Error, Result};

/// Decode a measured value into whole lux.
///
/// Total over all inputs: very small codes decode to 0 and very large ones
/// saturate at `i64::MAX`. No range check is applied; see
/// [`IlluminanceConverter::illuminance_of`] for a checked variant.
#[must_use]
pub fn to_illuminance(measured_value: i64) -> i64 {
    let exponent = measured_value.saturating_sub(1) as f64 / LOG_SCALE;
    // Float to int casts saturate, so an infinite power maps to i64::MAX.
    10f64.powf(exponent).floor() as i64
}

/// Encode lux into a measured value.
///
/// Fails for zero or negative illuminance, where `log10` is undefined.
pub fn to_measured_value(illuminance: i64) -> Result<i64> {
    if illuminance <= 0 {
        return Err(Error::NonPositiveIlluminance(illuminance));
    }
    Ok(encode(illuminance))
}

// Caller guarantees `illuminance >= 1`.
fn encode(illuminance: i64) -> i64 {
    (LOG_SCALE * (illuminance as f64).log10() + 1.0).round() as i64
}

/// What to do when the floor search ends outside of the measured range.
///
/// The search stops once it has stepped past the maximum and then backs off
/// one step unless the decoded value hit the target exactly. When the initial
/// estimate already overshoots the maximum that back-off can still leave the
/// result above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Clamp the result into the measured range.
    #[default]
    Saturate,
    /// Return the search result as is, even when it is out of range.
    Legacy,
}

impl std::fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryMode::Saturate => write!(f, "saturate"),
            BoundaryMode::Legacy => write!(f, "legacy"),
        }
    }
}

/// Bounds and boundary policy for an [`IlluminanceConverter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Handling of search results outside of `measured`.
    #[serde(default)]
    pub boundary: BoundaryMode,
    /// Illuminance the sensor may report.
    #[serde(default)]
    pub lux: LuxRange,
    /// Valid encoded values.
    #[serde(default)]
    pub measured: MeasuredRange,
}

impl ConverterConfig {
    /// Validate both ranges.
    ///
    /// Failures are reported as [`Error::InvalidConfig`] naming the
    /// offending table.
    pub fn validate(&self) -> Result<()> {
        self.lux
            .validate()
            .map_err(|e| Error::invalid_config(format!("lux: {e}")))?;
        self.measured
            .validate()
            .map_err(|e| Error::invalid_config(format!("measured: {e}")))?;
        Ok(())
    }

    /// Set the boundary mode.
    #[must_use]
    pub fn boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Trace of a single floor search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// Illuminance as requested by the caller.
    pub requested: i64,
    /// Requested illuminance after clamping into the lux range.
    pub clamped: i64,
    /// Initial estimate from the logarithmic inverse.
    pub estimate: i64,
    /// Number of forward steps taken from the estimate.
    pub steps: u64,
    /// Search result before the boundary policy was applied.
    pub candidate: i64,
    /// Final measured value.
    pub value: i64,
    /// Illuminance `value` decodes to.
    pub decoded: i64,
    /// Whether `decoded` equals `clamped`.
    pub exact: bool,
    /// Whether the boundary policy changed the candidate.
    pub saturated: bool,
}

/// Converts between lux and measured values within configured bounds.
///
/// Immutable after construction. Build one at startup and share it as a
/// [`crate::SharedConverter`].
#[derive(Debug, Clone, Default)]
pub struct IlluminanceConverter {
    config: ConverterConfig,
}

impl IlluminanceConverter {
    /// Create a converter, rejecting invalid ranges.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Clamp `value` into the configured lux range.
    #[must_use]
    pub fn illuminance_min_max(&self, value: i64) -> i64 {
        self.config.lux.clamp(value)
    }

    /// Decode a measured value, rejecting codes outside of the measured range.
    pub fn illuminance_of(&self, measured_value: i64) -> Result<i64> {
        let measured_value = self.config.measured.check(measured_value)?;
        Ok(to_illuminance(measured_value))
    }

    /// Find the measured value whose decoded lux best matches `illuminance`
    /// without exceeding it.
    #[must_use]
    pub fn find_measured_value(&self, illuminance: i64) -> i64 {
        self.search(illuminance).value
    }

    /// Run the floor search and return its full trace.
    pub fn search(&self, illuminance: i64) -> Search {
        let max = self.config.measured.max;
        // The lux range starts at 1 or above, so encode() is defined.
        let clamped = self.illuminance_min_max(illuminance);

        let estimate = encode(clamped);
        let mut measured_value = estimate;
        let mut decoded = to_illuminance(measured_value);
        let mut steps = 0u64;

        while clamped > decoded && measured_value <= max {
            measured_value += 1;
            decoded = to_illuminance(measured_value);
            steps += 1;
        }

        let exact = clamped == decoded;
        let candidate = if exact {
            measured_value
        } else {
            measured_value - 1
        };

        let value = match self.config.boundary {
            BoundaryMode::Saturate => self.config.measured.clamp(candidate),
            BoundaryMode::Legacy => candidate,
        };
        let saturated = value != candidate;
        if saturated {
            warn!(
                requested = illuminance,
                candidate,
                value,
                "Search result outside of measured range {}, saturated",
                self.config.measured
            );
        }

        debug!(
            requested = illuminance,
            clamped, estimate, steps, candidate, value, "Measured value search"
        );

        Search {
            requested: illuminance,
            clamped,
            estimate,
            steps,
            candidate,
            value,
            decoded: to_illuminance(value),
            exact,
            saturated,
        }
    }
}
