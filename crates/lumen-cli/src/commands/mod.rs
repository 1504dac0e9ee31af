//! Command implementations for the CLI.

mod config;
mod convert;
mod onboarding;

pub use config::cmd_config;
pub use convert::{cmd_clamp, cmd_find, cmd_lux, cmd_measured, cmd_table};
pub use onboarding::{cmd_discriminator, cmd_setup_code};
