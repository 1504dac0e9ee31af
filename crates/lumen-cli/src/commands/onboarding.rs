//! Onboarding command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use lumen_core::{Discriminator, PayloadKind, SetupPayload};

use crate::config::Config;
use crate::format::FormatOptions;
use crate::util::write_output;

#[derive(Debug, Serialize)]
struct SetupCodeOutput<'a> {
    prefix: &'a str,
    kind: String,
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct DiscriminatorOutput {
    discriminator: u16,
    hex: String,
    source: &'static str,
}

pub fn cmd_setup_code(payload: &str, opts: &FormatOptions, output: Option<&PathBuf>) -> Result<()> {
    let parsed = SetupPayload::parse(payload).context("Cannot read onboarding payload")?;
    let kind = parsed.kind();

    let result = SetupCodeOutput {
        prefix: parsed.prefix,
        kind: kind.to_string(),
        code: parsed.code,
    };
    let content = opts.render(&result, || {
        let mut out = format!("{}\n", parsed.code);
        if kind != PayloadKind::Matter {
            out.push_str(&format!(
                "{}\n",
                opts.note(&format!("(payload kind: {})", kind))
            ));
        }
        out
    })?;
    write_output(output, &content)
}

pub fn cmd_discriminator(
    seed: Option<&str>,
    random: bool,
    config: &Config,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (discriminator, source) = if random {
        (Discriminator::random(), "random")
    } else if let Some(seed) = seed {
        (Discriminator::from_seed(seed), "seed")
    } else if let Some(seed) = config.discriminator_seed.as_deref() {
        (Discriminator::from_seed(seed), "config")
    } else {
        (Discriminator::for_host(), "host")
    };

    let result = DiscriminatorOutput {
        discriminator: discriminator.value(),
        hex: format!("{:#05X}", discriminator.value()),
        source,
    };
    let content = opts.render(&result, || {
        format!(
            "{} {}\n",
            discriminator,
            opts.note(&format!("({}, from {})", result.hex, source))
        )
    })?;
    write_output(output, &content)
}
