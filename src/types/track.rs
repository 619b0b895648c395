use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single emitted point, second precision, immutable once created
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: f64,
    pub time: DateTime<Utc>,
}

/// Contiguous run of chronologically close points. Internal gaps never
/// exceed the configured max-gap threshold.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// Full converted output for one input file: an ordered sequence of
/// segments, built once, serialized, then discarded.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    /// Input basename with the extension stripped; becomes the GPX `<name>`
    pub name: String,
    pub segments: Vec<TrackSegment>,
}

impl Track {
    pub fn new(name: &str) -> Self {
        Track {
            name: name.to_string(),
            segments: Vec::new(),
        }
    }

    /// Total points across all segments
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

/// Render a coordinate with the fixed 6-decimal GPX precision
pub fn format_coord(value: f64) -> String {
    format!("{:.6}", value)
}

/// Render an elevation with 2 decimal digits
pub fn format_ele(value: f64) -> String {
    format!("{:.2}", value)
}

/// Render a timestamp as UTC `YYYY-MM-DDTHH:MM:SSZ`
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
