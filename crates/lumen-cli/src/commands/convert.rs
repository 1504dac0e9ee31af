//! Conversion command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use lumen_core::{IlluminanceConverter, to_illuminance, to_measured_value};

use crate::format::{FormatOptions, TableRow, format_search_text, format_table_text};
use crate::util::write_output;

/// Upper bound on table rows, so a tiny step cannot flood the terminal.
const MAX_TABLE_ROWS: i64 = 10_000;

#[derive(Debug, Serialize)]
struct Conversion {
    measured: i64,
    lux: i64,
}

#[derive(Debug, Serialize)]
struct Clamped {
    requested: i64,
    clamped: i64,
    min: i64,
    max: i64,
}

pub fn cmd_lux(
    converter: &IlluminanceConverter,
    measured: i64,
    unchecked: bool,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let lux = if unchecked {
        to_illuminance(measured)
    } else {
        converter
            .illuminance_of(measured)
            .context("Measured value rejected (use --unchecked to decode anyway)")?
    };

    let result = Conversion { measured, lux };
    let content = opts.render(&result, || {
        format!("{} -> {}\n", opts.measured(measured), opts.lux(lux))
    })?;
    write_output(output, &content)
}

pub fn cmd_measured(lux: i64, opts: &FormatOptions, output: Option<&PathBuf>) -> Result<()> {
    let measured = to_measured_value(lux).context("Cannot encode illuminance")?;

    let result = Conversion { measured, lux };
    let content = opts.render(&result, || {
        format!("{} -> {}\n", opts.lux(lux), opts.measured(measured))
    })?;
    write_output(output, &content)
}

pub fn cmd_clamp(
    converter: &IlluminanceConverter,
    lux: i64,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let range = converter.config().lux;
    let result = Clamped {
        requested: lux,
        clamped: converter.illuminance_min_max(lux),
        min: range.min,
        max: range.max,
    };
    let content = opts.render(&result, || format!("{}\n", opts.lux(result.clamped)))?;
    write_output(output, &content)
}

pub fn cmd_find(
    converter: &IlluminanceConverter,
    lux: i64,
    explain: bool,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let search = converter.search(lux);
    let content = opts.render(&search, || format_search_text(&search, explain, opts))?;
    write_output(output, &content)
}

pub fn cmd_table(
    from: i64,
    to: i64,
    step: i64,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let rows = table_rows(from, to, step)?;
    debug!("Table with {} rows ({}..={} step {})", rows.len(), from, to, step);

    let content = opts.render(&rows, || format_table_text(&rows, opts))?;
    write_output(output, &content)
}

fn table_rows(from: i64, to: i64, step: i64) -> Result<Vec<TableRow>> {
    if step < 1 {
        bail!("Step must be at least 1, got {}", step);
    }
    if from > to {
        bail!("--from ({}) must not be greater than --to ({})", from, to);
    }
    // Widened so spans across the whole i64 range cannot overflow.
    let count = (i128::from(to) - i128::from(from)) / i128::from(step) + 1;
    if count > i128::from(MAX_TABLE_ROWS) {
        bail!(
            "Table would have {} rows (limit {}); use a larger --step",
            count,
            MAX_TABLE_ROWS
        );
    }

    // Every row lies in from..=to, so narrowing back to i64 is lossless.
    let mut rows: Vec<TableRow> = (0..count)
        .map(|i| (i128::from(from) + i * i128::from(step)) as i64)
        .map(|measured| TableRow {
            measured,
            lux: to_illuminance(measured),
        })
        .collect();
    // Always end on the requested upper bound.
    if rows.last().is_some_and(|row| row.measured != to) {
        rows.push(TableRow {
            measured: to,
            lux: to_illuminance(to),
        });
    }
    Ok(rows)
}
