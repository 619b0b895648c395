//! GPX 1.1 serialization of assembled tracks
//!
//! Writes the document element-by-element with `writeln!` rather than going
//! through an XML library; the output shape is fixed and small.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::{format_coord, format_ele, format_time, Track};

/// Escape the characters XML forbids in text content
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Serialize a track as a GPX 1.1 document
pub fn write_gpx<W: Write>(track: &Track, out: &mut W) -> Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<gpx version="1.1" creator="csv2gpx" xmlns="http://www.topografix.com/GPX/1/1">"#
    )?;
    writeln!(out, "<trk>")?;
    writeln!(out, "<name>{}</name>", xml_escape(&track.name))?;

    for segment in &track.segments {
        writeln!(out, "<trkseg>")?;
        for point in &segment.points {
            writeln!(
                out,
                r#"  <trkpt lat="{}" lon="{}"><ele>{}</ele><time>{}</time></trkpt>"#,
                format_coord(point.lat),
                format_coord(point.lon),
                format_ele(point.ele),
                format_time(&point.time)
            )?;
        }
        writeln!(out, "</trkseg>")?;
    }

    writeln!(out, "</trk>")?;
    writeln!(out, "</gpx>")?;
    Ok(())
}

/// Write a track to the given path, creating or truncating the file
pub fn export_track_to_gpx(track: &Track, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_gpx(track, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TrackPoint, TrackSegment};
    use chrono::{TimeZone, Utc};

    fn sample_track() -> Track {
        Track {
            name: "morning <run> & walk".to_string(),
            segments: vec![TrackSegment {
                points: vec![TrackPoint {
                    lat: 31.2304,
                    lon: 121.4737,
                    ele: 4.5,
                    time: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                }],
            }],
        }
    }

    #[test]
    fn gpx_document_shape() {
        let mut buf = Vec::new();
        write_gpx(&sample_track(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(text.contains(r#"<gpx version="1.1" creator="csv2gpx" xmlns="http://www.topografix.com/GPX/1/1">"#));
        assert!(text.contains("<name>morning &lt;run&gt; &amp; walk</name>"));
        assert!(text.contains(r#"<trkpt lat="31.230400" lon="121.473700"><ele>4.50</ele><time>2023-11-14T22:13:20Z</time></trkpt>"#));
        assert!(text.trim_end().ends_with("</gpx>"));
    }

    #[test]
    fn empty_track_produces_well_formed_document() {
        let track = Track::new("empty");
        let mut buf = Vec::new();
        write_gpx(&track, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("<name>empty</name>"));
        assert!(!text.contains("<trkseg>"));
        assert!(text.trim_end().ends_with("</gpx>"));
    }
}
