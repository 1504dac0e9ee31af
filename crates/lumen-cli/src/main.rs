use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;

mod cli;
mod commands;
mod config;
mod format;
mod util;

use cli::{Cli, Commands};
use commands::{
    cmd_clamp, cmd_config, cmd_discriminator, cmd_find, cmd_lux, cmd_measured, cmd_setup_code,
    cmd_table,
};
use config::{Config, resolve_format, resolve_path};
use format::FormatOptions;
use util::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "lumen", &mut io::stdout());
        return Ok(());
    }

    init_tracing(cli.verbose, cli.quiet);

    let config_path = resolve_path(cli.config.as_deref());
    debug!("Using config file {}", config_path.display());
    let config = Config::load_from(&config_path);

    let format = resolve_format(cli.json, cli.format, &config);
    let opts = FormatOptions::new(format, cli.no_color, cli.compact);
    let output = cli.output.as_ref();

    // `config` stays usable with a broken file so it can be inspected or
    // replaced; everything else refuses to start on invalid ranges.
    if let Commands::Config { action } = &cli.command {
        return cmd_config(action, &config_path, &config, output);
    }
    let converter = config.converter(cli.legacy_boundary)?;

    match &cli.command {
        Commands::SetupCode { payload } => cmd_setup_code(payload, &opts, output),
        Commands::Discriminator { seed, random } => {
            cmd_discriminator(seed.as_deref(), *random, &config, &opts, output)
        }
        Commands::Measured { lux } => cmd_measured(*lux, &opts, output),
        Commands::Table { from, to, step } => cmd_table(*from, *to, *step, &opts, output),
        Commands::Lux {
            measured,
            unchecked,
        } => cmd_lux(&converter, *measured, *unchecked, &opts, output),
        Commands::Clamp { lux } => cmd_clamp(&converter, *lux, &opts, output),
        Commands::Find { lux, explain } => cmd_find(&converter, *lux, *explain, &opts, output),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
