//! Protocol constants and range types for Matter illuminance measurement.
//!
//! This crate holds the pieces shared by the converter library
//! (lumen-core) and the command-line tool (lumen-cli) that carry no
//! conversion logic of their own.
//!
//! # Features
//!
//! - Measured-value and light-sensor constants of the Illuminance
//!   Measurement cluster
//! - Validated inclusive ranges for lux and encoded values
//! - Error types for range construction and checks
//!
//! # Example
//!
//! ```
//! use lumen_types::{LuxRange, MeasuredRange, protocol};
//!
//! let lux = LuxRange::default();
//! assert_eq!(lux.min, protocol::LIGHTSENSOR_MIN_VAL);
//!
//! let measured = MeasuredRange::default();
//! assert!(measured.contains(protocol::MEASURED_VALUE_MAX));
//! ```

pub mod error;
pub mod protocol;
pub mod range;

pub use error::{RangeError, RangeResult};
pub use range::{LuxRange, MeasuredRange};
