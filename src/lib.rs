//! CSV-to-GPX Track Converter Library
//!
//! A Rust library for converting GPS track logs exported by consumer
//! location-tracking apps (Variflight and Footprint CSV schemas) into GPX
//! 1.1, filling time gaps with linearly interpolated points and splitting
//! tracks on large connectivity gaps.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary and the
//!   batch directory driver
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Convert a single CSV file:
//! ```rust,no_run
//! use csv2gpx::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let options = ConvertOptions::default();
//! let report = convert_file(Path::new("input/flight.csv"), Path::new("output"), &options).unwrap();
//! println!("Detected {} format, {} points", report.format, report.points_generated);
//! ```
//!
//! Build a track in memory and serialize it yourself:
//! ```rust,no_run
//! use csv2gpx::{build_track, write_gpx, CanonicalRecord, ConvertOptions};
//!
//! let records = vec![
//!     CanonicalRecord { timestamp: 1_700_000_000.0, lat: 31.23, lon: 121.47, ele: 4.0 },
//!     CanonicalRecord { timestamp: 1_700_000_010.0, lat: 31.24, lon: 121.48, ele: 5.0 },
//! ];
//! let (track, generated) = build_track(&records, "demo", &ConvertOptions::default());
//! let mut buf = Vec::new();
//! write_gpx(&track, &mut buf).unwrap();
//! println!("{} interpolated points", generated);
//! ```
//!
//! # Public API
//!
//! ## Pipeline Functions
//! - [`convert_file`] - Convert one vendor CSV into a GPX file
//! - [`convert_directory`] - Batch-convert every CSV in the input directory (`cli` feature)
//! - [`ensure_folders_exist`] - Create the input/output folders on first run
//!
//! ## Data Types
//! - [`CanonicalRecord`] - Normalized `{timestamp, lat, lon, ele}` row
//! - [`Track`] / [`TrackSegment`] / [`TrackPoint`] - Assembled output track
//! - [`TrackFormat`] - Detected vendor schema
//! - [`ConvertOptions`] - Thresholds and directory layout
//! - [`ConvertReport`] / [`BatchSummary`] - Per-file and per-run results
//!
//! ## Schema Functions
//! - [`detect_format`] - Match trimmed column names against the schema table
//! - [`normalize`] - Map raw CSV rows onto the canonical column set
//!
//! ## Track Functions
//! - [`build_track`] - Sort, segment, and interpolate canonical records
//! - [`write_gpx`] / [`export_track_to_gpx`] - GPX 1.1 serialization
//! - [`format_coord`] / [`format_ele`] / [`format_time`] - Fixed-precision field rendering

// Module declarations
pub mod error;
pub mod export;
pub mod pipeline;
pub mod schema;
pub mod track;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use pipeline::*;
#[allow(ambiguous_glob_reexports)]
pub use schema::*;
#[allow(ambiguous_glob_reexports)]
pub use track::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
