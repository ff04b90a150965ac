//! stone-lut: Precompute blink counts and write them as a flat binary table.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use stone_lut::cli;
use stone_lut::table::{DEFAULT_DEPTHS, DEFAULT_VALUES};
use stone_lut::RecurrenceEngine;

#[derive(Parser)]
#[command(name = "stone-lut", about = "Precompute the blink-count lookup table")]
struct Args {
    /// Output file (defaults to $STONE_LUT_OUTPUT, then ./day11_lut.bin)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Number of stone values in the table (0..values)
    #[arg(long, default_value_t = DEFAULT_VALUES)]
    values: usize,

    /// Number of depth levels in the table (0..depths)
    #[arg(long, default_value_t = DEFAULT_DEPTHS)]
    depths: usize,

    /// Summary format: json or text
    #[arg(long, default_value = "text", value_parser = validate_format)]
    format: String,

    /// Suppress all logging
    #[arg(long)]
    log_disable: bool,
}

fn validate_format(s: &str) -> Result<String, String> {
    match s {
        "json" | "text" => Ok(s.to_string()),
        _ => Err(format!("Unknown format '{}'. Options: json, text", s)),
    }
}

#[derive(Serialize)]
struct Timings {
    build_ms: f64,
    write_ms: f64,
    total_ms: f64,
}

#[derive(Serialize)]
struct Summary {
    output: String,
    values: usize,
    depths: usize,
    entries: usize,
    bytes: usize,
    memo_entries: usize,
    timings: Timings,
}

fn main() {
    let args = Args::parse();
    cli::init_logging(args.log_disable);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let shape = cli::resolve_shape(args.values, args.depths)?;
    let output = cli::resolve_output(args.output.as_deref());

    let total_start = Instant::now();

    let mut memo_entries = 0;
    let table = RecurrenceEngine::new(shape).build_table_with(|event| {
        memo_entries = event.memo_entries;
        tracing::info!(
            depth = event.depth,
            memo_entries = event.memo_entries,
            elapsed_ms = event.elapsed.as_secs_f64() * 1000.0,
            "finished level"
        );
    })?;
    let build_ms = total_start.elapsed().as_secs_f64() * 1000.0;

    let write_start = Instant::now();
    table.save(&output)?;
    let write_ms = write_start.elapsed().as_secs_f64() * 1000.0;

    let summary = Summary {
        output: output.display().to_string(),
        values: shape.values,
        depths: shape.depths,
        entries: shape.len(),
        bytes: shape.byte_len(),
        memo_entries,
        timings: Timings {
            build_ms,
            write_ms,
            total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        },
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        "text" => {
            println!(
                "Wrote {} entries ({}x{}, {} bytes) to {}",
                summary.entries, summary.depths, summary.values, summary.bytes, summary.output
            );
            println!(
                "Memo entries: {}  build: {:.1} ms  write: {:.1} ms",
                summary.memo_entries, summary.timings.build_ms, summary.timings.write_ms
            );
        }
        _ => unreachable!(), // validated by clap
    }

    Ok(())
}
