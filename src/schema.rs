//! Vendor schema detection and normalization
//!
//! Maps the two recognized consumer-app CSV schemas onto the canonical
//! `{timestamp, lat, lon, ele}` column set. The schema table is static data
//! checked in priority order, so supporting a third vendor format is a
//! single new table entry.

use crate::types::{CanonicalRecord, RawRecord, TrackFormat};

/// Column requirements and renames for one vendor schema
#[derive(Debug)]
pub struct SchemaDef {
    pub format: TrackFormat,
    /// Columns that must all be present for this schema to match
    pub required: &'static [&'static str],
    /// Vendor column name per canonical slot; the elevation column may be
    /// absent from a file, in which case elevation defaults to 0.0
    pub renames: &'static [(&'static str, &'static str)],
}

/// Known vendor schemas, checked in order; first match wins
pub static SCHEMAS: &[SchemaDef] = &[
    SchemaDef {
        format: TrackFormat::Variflight,
        required: &["Time", "Latitude", "Longitude"],
        renames: &[
            ("Time", "timestamp"),
            ("Latitude", "lat"),
            ("Longitude", "lon"),
            ("Height", "ele"),
        ],
    },
    SchemaDef {
        format: TrackFormat::Footprint,
        required: &["dataTime", "latitude", "longitude"],
        renames: &[
            ("dataTime", "timestamp"),
            ("latitude", "lat"),
            ("longitude", "lon"),
            ("altitude", "ele"),
        ],
    },
];

/// Strip surrounding whitespace from every header cell
pub fn trim_headers(headers: &RawRecord) -> Vec<String> {
    headers.iter().map(|h| h.trim().to_string()).collect()
}

/// Find the first schema whose required columns are all present.
/// Extra unrelated columns never affect detection.
pub fn detect_format(columns: &[String]) -> Option<&'static SchemaDef> {
    SCHEMAS
        .iter()
        .find(|schema| schema.required.iter().all(|req| columns.iter().any(|c| c == req)))
}

/// Normalize raw CSV rows onto the canonical column set.
///
/// Returns `None` when neither known schema matches; the caller reports the
/// column list and skips the file. Unparseable timestamp/lat/lon values
/// become NaN rather than errors and are filtered before track building.
pub fn normalize(headers: &RawRecord, rows: &[RawRecord]) -> Option<(Vec<CanonicalRecord>, TrackFormat)> {
    let columns = trim_headers(headers);
    let schema = detect_format(&columns)?;

    let index_of = |canonical: &str| -> Option<usize> {
        schema
            .renames
            .iter()
            .find(|(_, canon)| *canon == canonical)
            .and_then(|(vendor, _)| columns.iter().position(|c| c == vendor))
    };

    // The required-column check guarantees these three resolve
    let ts_idx = index_of("timestamp")?;
    let lat_idx = index_of("lat")?;
    let lon_idx = index_of("lon")?;
    let ele_idx = index_of("ele");

    let records = rows
        .iter()
        .map(|row| CanonicalRecord {
            timestamp: numeric_field(row, ts_idx),
            lat: numeric_field(row, lat_idx),
            lon: numeric_field(row, lon_idx),
            ele: match ele_idx {
                Some(idx) => numeric_field_or(row, idx, 0.0),
                None => 0.0,
            },
        })
        .collect();

    Some((records, schema.format))
}

fn numeric_field(row: &RawRecord, idx: usize) -> f64 {
    numeric_field_or(row, idx, f64::NAN)
}

fn numeric_field_or(row: &RawRecord, idx: usize, fallback: f64) -> f64 {
    row.get(idx)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(fallback)
}
