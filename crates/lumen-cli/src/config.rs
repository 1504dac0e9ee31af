//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use lumen_core::{BoundaryMode, ConverterConfig, IlluminanceConverter, SharedConverter};

use crate::cli::OutputFormat;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,

    /// Seed for discriminator generation (host name when unset)
    #[serde(default)]
    pub discriminator_seed: Option<String>,

    /// Converter bounds and boundary policy
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Config {
    /// Get the default config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lumen")
            .join("config.toml")
    }

    /// Load config from `path`, or return default if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Build the shared converter, applying the boundary override.
    pub fn converter(&self, legacy_boundary: bool) -> Result<SharedConverter> {
        let mut converter_config = self.converter.clone();
        if legacy_boundary {
            converter_config.boundary = BoundaryMode::Legacy;
        }
        let converter = IlluminanceConverter::new(converter_config)
            .context("Invalid converter configuration")?;
        Ok(SharedConverter::new(converter))
    }
}

/// Resolve the config file path: explicit flag, then default location
pub fn resolve_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf).unwrap_or_else(Config::path)
}

/// Resolve output format: --json, then --format, then config, then text
pub fn resolve_format(json: bool, flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if json {
        return OutputFormat::Json;
    }
    if let Some(format) = flag {
        return format;
    }
    match config.format.as_deref() {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            warn!("Unknown format '{}' in config, using text", name);
            OutputFormat::Text
        }),
        None => OutputFormat::Text,
    }
}
