//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lumen_core::parse_lux;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Parse a lux argument. Fractions are truncated; a leading `-` is kept so
/// out-of-range requests reach the clamp.
fn lux_arg(value: &str) -> Result<i64, String> {
    let value = value.trim();
    let parsed = match value.strip_prefix('-') {
        Some(rest) => parse_lux(rest).map(|lux| -lux),
        None => parse_lux(value),
    };
    parsed.map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about = "Convert between lux and Matter illuminance measured values", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "LUMEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Return raw search results past the measured maximum instead of saturating
    #[arg(long, global = true)]
    pub legacy_boundary: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a measured value into lux
    Lux {
        /// Encoded measured value
        #[arg(allow_hyphen_values = true)]
        measured: i64,

        /// Decode even when the value is outside of the measured range
        #[arg(long)]
        unchecked: bool,
    },

    /// Encode lux directly into a measured value (no clamping or search)
    Measured {
        /// Illuminance in lux
        #[arg(allow_hyphen_values = true, value_parser = lux_arg)]
        lux: i64,
    },

    /// Clamp an illuminance into the light sensor range
    Clamp {
        /// Illuminance in lux
        #[arg(allow_hyphen_values = true, value_parser = lux_arg)]
        lux: i64,
    },

    /// Find the measured value that best reproduces an illuminance
    Find {
        /// Illuminance in lux
        #[arg(allow_hyphen_values = true, value_parser = lux_arg)]
        lux: i64,

        /// Show the steps the search took
        #[arg(short, long)]
        explain: bool,
    },

    /// Print a table of measured values and the lux they decode to
    Table {
        /// First measured value
        #[arg(long, default_value = "1")]
        from: i64,

        /// Last measured value
        #[arg(long, default_value = "65534")]
        to: i64,

        /// Distance between rows
        #[arg(long, default_value = "5000", value_parser = clap::value_parser!(i64).range(1..))]
        step: i64,
    },

    /// Extract the setup code from an onboarding payload (e.g. MT:...)
    SetupCode {
        /// Onboarding payload
        payload: String,
    },

    /// Generate a commissioning discriminator
    Discriminator {
        /// Seed string (defaults to the config seed, then the host name)
        #[arg(long, conflicts_with = "random")]
        seed: Option<String>,

        /// Ignore seeds and draw a random discriminator
        #[arg(long)]
        random: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
