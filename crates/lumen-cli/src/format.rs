//! Output formatting utilities for text and JSON output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use lumen_core::Search;

use crate::cli::OutputFormat;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Selected output format.
    pub format: OutputFormat,
    /// Disable colored output.
    pub no_color: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(format: OutputFormat, no_color: bool, compact: bool) -> Self {
        Self {
            format,
            no_color,
            compact,
        }
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    /// Render `value` as JSON, or as text produced by `text`.
    pub fn render<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.as_json(value),
            OutputFormat::Text => Ok(text()),
        }
    }

    /// Format an illuminance with its unit.
    #[must_use]
    pub fn lux(&self, lux: i64) -> String {
        if self.no_color {
            format!("{} lx", lux)
        } else {
            format!("{} lx", lux.yellow())
        }
    }

    /// Format an encoded measured value.
    #[must_use]
    pub fn measured(&self, value: i64) -> String {
        if self.no_color {
            format!("{}", value)
        } else {
            format!("{}", value.cyan())
        }
    }

    /// Format a note that should stand out from the values.
    #[must_use]
    pub fn note(&self, text: &str) -> String {
        if self.no_color {
            text.to_string()
        } else {
            format!("{}", text.dimmed())
        }
    }
}

/// Text for a floor search, optionally with its trace.
pub fn format_search_text(search: &Search, explain: bool, opts: &FormatOptions) -> String {
    let mut out = format!(
        "{} -> {}\n",
        opts.lux(search.requested),
        opts.measured(search.value)
    );
    if !explain {
        return out;
    }

    out.push_str(&format!("  clamped:   {}\n", opts.lux(search.clamped)));
    out.push_str(&format!("  estimate:  {}\n", opts.measured(search.estimate)));
    out.push_str(&format!("  steps:     {}\n", search.steps));
    out.push_str(&format!("  candidate: {}\n", opts.measured(search.candidate)));
    out.push_str(&format!("  decoded:   {}\n", opts.lux(search.decoded)));
    if !search.exact {
        out.push_str(&format!(
            "  {}\n",
            opts.note("no measured value decodes to exactly the requested lux")
        ));
    }
    if search.saturated {
        out.push_str(&format!(
            "  {}\n",
            opts.note("result saturated at the measured range boundary")
        ));
    }
    out
}

/// One row of a measured value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub measured: i64,
    pub lux: i64,
}

/// Text for a measured value table.
pub fn format_table_text(rows: &[TableRow], opts: &FormatOptions) -> String {
    let mut out = format!("{:>10}  {:>12}\n", "measured", "lux");
    for row in rows {
        // Pad before coloring so escape codes do not skew alignment.
        let measured = format!("{:>10}", row.measured);
        let lux = format!("{:>12}", row.lux);
        if opts.no_color {
            out.push_str(&format!("{}  {}\n", measured, lux));
        } else {
            out.push_str(&format!("{}  {}\n", measured.cyan(), lux.yellow()));
        }
    }
    out
}
