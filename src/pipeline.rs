//! Per-file conversion pipeline and batch directory driver
//!
//! A file goes read CSV -> normalize schema -> build track -> write GPX.
//! Files are independent; a failure in one never aborts the batch.

use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{ConvertError, Result};
use crate::export::export_track_to_gpx;
use crate::schema;
use crate::track::{build_track, ConvertOptions};
use crate::types::{RawRecord, TrackFormat};

/// Result of converting one input file
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub format: TrackFormat,
    /// Points emitted by the as-is and interpolation branches (see
    /// [`build_track`] for what this excludes)
    pub points_generated: usize,
    pub output_path: PathBuf,
}

/// Totals for one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub files_found: usize,
    pub converted: usize,
    pub skipped: usize,
}

/// Create the input and output folders on first run
pub fn ensure_folders_exist(options: &ConvertOptions) -> Result<()> {
    let input_dir = Path::new(&options.input_dir);
    if !input_dir.exists() {
        fs::create_dir_all(input_dir)?;
        println!("Created input folder: {} (drop CSV files there)", options.input_dir);
    }
    let output_dir = Path::new(&options.output_dir);
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
        println!("Created output folder: {}", options.output_dir);
    }
    Ok(())
}

/// Convert one vendor CSV into `<output_dir>/<basename>.gpx`.
///
/// Fails with [`ConvertError::UnrecognizedSchema`] when the columns match
/// neither known format; the error carries the column list so callers can
/// report it. An input that filters down to zero usable records still
/// produces a well-formed GPX with no segments.
pub fn convert_file(input_path: &Path, output_dir: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input_path)?;
    let headers = reader.headers()?.clone();
    let rows: Vec<RawRecord> = reader.records().collect::<std::result::Result<_, _>>()?;

    let (records, format) = match schema::normalize(&headers, &rows) {
        Some(normalized) => normalized,
        None => {
            return Err(ConvertError::UnrecognizedSchema {
                filename: filename.to_string(),
                columns: schema::trim_headers(&headers),
            })
        }
    };

    let base_name = input_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");
    let (track, points_generated) = build_track(&records, base_name, options);

    let output_path = output_dir.join(format!("{base_name}.gpx"));
    export_track_to_gpx(&track, &output_path)?;

    Ok(ConvertReport {
        format,
        points_generated,
        output_path,
    })
}

/// Convert every `*.csv` in the input directory (non-recursive).
///
/// Per-file errors are printed and the batch continues; an empty input
/// directory is a no-op run, not a failure.
#[cfg(feature = "cli")]
pub fn convert_directory(options: &ConvertOptions) -> Result<BatchSummary> {
    ensure_folders_exist(options)?;

    let pattern = format!("{}/*.csv", options.input_dir);
    let mut csv_files: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| ConvertError::InvalidPattern(format!("{pattern}: {e}")))?
        .filter_map(|entry| entry.ok())
        .collect();
    csv_files.sort();

    let mut summary = BatchSummary {
        files_found: csv_files.len(),
        ..Default::default()
    };

    if csv_files.is_empty() {
        println!("Warning: no CSV files in {} - add some and run again.", options.input_dir);
        return Ok(summary);
    }

    println!("Found {} CSV file(s), processing...\n", csv_files.len());

    let output_dir = PathBuf::from(&options.output_dir);
    for path in &csv_files {
        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");
        println!("Processing: {filename}");

        match convert_file(path, &output_dir, options) {
            Ok(report) => {
                println!(
                    "Converted ({}) -> {} track point(s)",
                    report.format, report.points_generated
                );
                println!("Saved to: {}", report.output_path.display());
                summary.converted += 1;
            }
            Err(e) => {
                eprintln!("Error processing {filename}: {e}");
                eprintln!("Continuing with next file...");
                summary.skipped += 1;
            }
        }
        println!("{}", "-".repeat(40));
    }

    Ok(summary)
}
