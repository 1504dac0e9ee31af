//! Error types for lumen-core.
//!
//! # Error Classification
//!
//! | Error Type | Caused by | Recovery |
//! |------------|-----------|----------|
//! | [`Error::Range`] | Value outside of a configured range | Fix the input |
//! | [`Error::NonPositiveIlluminance`] | Raw inverse called with lux ≤ 0 | Clamp first (`illuminance_min_max`) |
//! | [`Error::InvalidSetupPayload`] | Onboarding payload without a code | Report to user |
//! | [`Error::InvalidDiscriminator`] | Value outside the 12-bit window | Generate a new one |
//! | [`Error::NotNumeric`] | User text that is not a decimal number | Report to user |
//! | [`Error::InvalidConfig`] | Inverted or invalid converter ranges | Fix configuration and restart |
//!
//! None of these are transient; retrying the same call gives the same error.

use thiserror::Error;

use lumen_types::RangeError;
use lumen_types::protocol::{DISCRIMINATOR_MAX, DISCRIMINATOR_MIN};

/// Errors produced by the converter and onboarding helpers.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A range was invalid or a value fell outside of one.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// `log10` is undefined for zero and negative illuminance.
    #[error("Illuminance must be positive, got {0} lx")]
    NonPositiveIlluminance(i64),

    /// Onboarding payload could not be split into prefix and code.
    #[error("Invalid setup payload '{payload}': {reason}")]
    InvalidSetupPayload {
        /// The payload as given.
        payload: String,
        /// Why it was rejected.
        reason: SetupPayloadReason,
    },

    /// Discriminator outside of the allowed window.
    #[error(
        "Discriminator {0:#05X} is outside of {min:#05X}..={max:#05X}",
        min = DISCRIMINATOR_MIN,
        max = DISCRIMINATOR_MAX
    )]
    InvalidDiscriminator(u16),

    /// Text that was expected to be a decimal number.
    #[error("Not a number: '{0}'")]
    NotNumeric(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Structured reasons for rejecting an onboarding payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupPayloadReason {
    /// No `:` between prefix and code.
    MissingSeparator,
    /// Nothing after the `:`.
    EmptyCode,
}

impl std::fmt::Display for SetupPayloadReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing ':' separator"),
            Self::EmptyCode => write!(f, "no setup code after ':'"),
        }
    }
}

impl Error {
    /// Create an invalid setup payload error.
    pub fn invalid_setup_payload(payload: impl Into<String>, reason: SetupPayloadReason) -> Self {
        Self::InvalidSetupPayload {
            payload: payload.into(),
            reason,
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using lumen-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
