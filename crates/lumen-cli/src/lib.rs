//! Command-line interface for the lumen illuminance converter.
//!
//! The `lumen` binary converts between illuminance in lux and the
//! logarithmic measured values of the Matter Illuminance Measurement
//! cluster, and carries a few helpers for emulated light sensors.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lux` | Decode a measured value into lux |
//! | `measured` | Encode lux directly into a measured value |
//! | `clamp` | Clamp lux into the light sensor range |
//! | `find` | Find the measured value that best reproduces an illuminance |
//! | `table` | Print measured values alongside the lux they decode to |
//! | `setup-code` | Extract the setup code from an onboarding payload |
//! | `discriminator` | Generate a commissioning discriminator |
//! | `config` | Manage the configuration file |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/lumen/config.toml` (or platform equivalent), or
//! the file named by `--config` / `LUMEN_CONFIG`:
//!
//! ```toml
//! format = "text"
//! discriminator_seed = "bench-01"
//!
//! [converter]
//! boundary = "saturate"
//!
//! [converter.lux]
//! min = 1
//! max = 3576000
//!
//! [converter.measured]
//! min = 1
//! max = 65534
//! ```
//!
//! # Environment Variables
//!
//! - `LUMEN_CONFIG`: Config file path (overridden by `--config`)
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Examples
//!
//! ```bash
//! lumen find 500
//! lumen find 65000 --explain
//! lumen lux 26991 --json
//! lumen table --from 1 --to 40001 --step 10000
//! ```

// Re-export core dependencies for convenience
pub use lumen_core;
pub use lumen_types;
