//! Example: Finding the Measured Value for an Illuminance
//!
//! This example shows the floor search an emulated light sensor runs when a
//! user sets a lux level, including the trace it produces.
//!
//! Run with: `RUST_LOG=debug cargo run --example find_measured_value -- <LUX>`

use std::env;

use lumen_core::{ConverterConfig, IlluminanceConverter, parse_lux};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let lux = if args.len() > 1 {
        parse_lux(&args[1])?
    } else {
        eprintln!("Usage: {} <LUX>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} 750", args[0]);
        std::process::exit(1);
    };

    let converter = IlluminanceConverter::new(ConverterConfig::default())?;
    let search = converter.search(lux);

    println!("Requested:    {} lx", search.requested);
    println!("Clamped:      {} lx", search.clamped);
    println!("Estimate:     {}", search.estimate);
    println!("Steps:        {}", search.steps);
    println!("Measured:     {}", search.value);
    println!("Decodes to:   {} lx", search.decoded);
    if !search.exact {
        println!("(no code decodes to exactly {} lx)", search.clamped);
    }

    Ok(())
}
