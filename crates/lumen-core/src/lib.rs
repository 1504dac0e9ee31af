//! Illuminance conversion and onboarding helpers for emulated Matter devices.
//!
//! This crate converts between lux and the logarithmic `MeasuredValue`
//! of the Illuminance Measurement cluster, and provides the small pieces of
//! commissioning logic an emulated light sensor needs.
//!
//! # Features
//!
//! - **Conversion**: lux ↔ measured value, with range-checked variants
//! - **Floor search**: the measured value that best reproduces a requested
//!   illuminance without exceeding it
//! - **Boundary policy**: saturate at the top of the range, or keep the raw
//!   search result
//! - **Onboarding**: setup-code extraction from `MT:` payloads
//! - **Discriminators**: host-seeded or random 12-bit discriminators
//! - **Validation**: plain decimal input checks
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use lumen_core::{ConverterConfig, IlluminanceConverter, SharedConverter};
//!
//! # fn main() -> lumen_core::Result<()> {
//! // Build once at startup and hand the same instance to every consumer.
//! let converter: SharedConverter = Arc::new(IlluminanceConverter::new(ConverterConfig::default())?);
//!
//! let code = converter.find_measured_value(500);
//! assert_eq!(converter.illuminance_of(code)?, 500);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod discriminator;
pub mod error;
pub mod onboarding;
pub mod validation;

// Re-export the types crate for downstream convenience
pub use lumen_types::protocol;
pub use lumen_types::{LuxRange, MeasuredRange, RangeError};

// Core exports
pub use convert::{
    BoundaryMode, ConverterConfig, IlluminanceConverter, Search, to_illuminance,
    to_measured_value,
};
pub use discriminator::Discriminator;
pub use error::{Error, Result, SetupPayloadReason};
pub use onboarding::{PayloadKind, SetupPayload, setup_code};
pub use validation::{is_numeric, parse_lux};

/// Type alias for a shared converter reference.
///
/// [`IlluminanceConverter`] is immutable, so one instance built at startup
/// can be handed to every consumer through an `Arc`.
pub type SharedConverter = std::sync::Arc<IlluminanceConverter>;
