//! Config command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::util::write_output;

pub fn cmd_config(
    action: &ConfigAction,
    path: &Path,
    config: &Config,
    output: Option<&PathBuf>,
) -> Result<()> {
    match action {
        ConfigAction::Path => write_output(output, &format!("{}\n", path.display())),
        ConfigAction::Show => {
            let content =
                toml::to_string_pretty(config).context("Failed to serialize config")?;
            write_output(output, &content)
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(path)?;
            info!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}
