use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw input row in vendor-specific column order, as read from the CSV.
/// Paired with the trimmed header record during normalization; no invariants
/// are guaranteed (user-supplied data may be missing or malformed).
pub type RawRecord = csv::StringRecord;

/// Vendor schema detected for an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackFormat {
    /// `Time`, `Latitude`, `Longitude`, optional `Height`
    Variflight,
    /// `dataTime`, `latitude`, `longitude`, optional `altitude`
    Footprint,
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackFormat::Variflight => write!(f, "Variflight"),
            TrackFormat::Footprint => write!(f, "Footprint"),
        }
    }
}

/// Normalized row regardless of source vendor schema
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalRecord {
    /// Seconds since the Unix epoch. NaN when the source value was missing
    /// or non-numeric; such records are filtered before track building.
    pub timestamp: f64,
    pub lat: f64,
    pub lon: f64,
    /// Elevation in meters; 0.0 for files without an elevation column
    pub ele: f64,
}

impl CanonicalRecord {
    /// True when timestamp, lat and lon are all usable numbers
    pub fn is_usable(&self) -> bool {
        !self.timestamp.is_nan() && !self.lat.is_nan() && !self.lon.is_nan()
    }
}
