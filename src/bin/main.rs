//! CLI binary for the CSV-to-GPX batch converter
//!
//! Running with no flags processes every CSV in `./input` and writes GPX
//! files to `./output`. Per-file errors are reported and the process always
//! exits 0.

use anyhow::Result;
use clap::{Arg, Command};
use csv2gpx::{convert_directory, ConvertOptions};

fn main() -> Result<()> {
    let matches = Command::new("csv2gpx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch convert consumer GPS tracker CSV logs (Variflight, Footprint) to GPX 1.1 with gap-aware interpolation.")
        .arg(
            Arg::new("input-dir")
                .long("input-dir")
                .help("Directory scanned for *.csv input files (created if absent)")
                .value_name("DIR")
                .default_value("input"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for generated .gpx files (created if absent)")
                .value_name("DIR")
                .default_value("output"),
        )
        .arg(
            Arg::new("max-gap")
                .long("max-gap")
                .help("Seconds without samples before the track splits into a new segment")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(f64))
                .default_value("300"),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .help("Interpolation step in seconds; gaps at or below it are left as-is")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(f64))
                .default_value("1"),
        )
        .get_matches();

    let options = ConvertOptions {
        input_dir: matches
            .get_one::<String>("input-dir")
            .cloned()
            .unwrap_or_else(|| "input".to_string()),
        output_dir: matches
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| "output".to_string()),
        max_gap_seconds: matches.get_one::<f64>("max-gap").copied().unwrap_or(300.0),
        interpolation_step: matches.get_one::<f64>("step").copied().unwrap_or(1.0),
    };

    if options.interpolation_step <= 0.0 {
        eprintln!("Error: --step must be positive");
        return Ok(());
    }
    if options.max_gap_seconds <= 0.0 {
        eprintln!("Error: --max-gap must be positive");
        return Ok(());
    }

    println!("csv2gpx starting...");

    match convert_directory(&options) {
        Ok(summary) => {
            if summary.files_found > 0 {
                println!("\nAll done: {} converted, {} skipped.", summary.converted, summary.skipped);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}
