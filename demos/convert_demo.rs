//! Minimal library walkthrough: build a track from in-memory records and
//! print the GPX document to stdout.
//!
//! Run with: cargo run --example convert_demo

use csv2gpx::{build_track, write_gpx, CanonicalRecord, ConvertOptions};

fn main() -> anyhow::Result<()> {
    let records = vec![
        CanonicalRecord {
            timestamp: 1_700_000_000.0,
            lat: 31.2304,
            lon: 121.4737,
            ele: 4.0,
        },
        CanonicalRecord {
            timestamp: 1_700_000_005.0,
            lat: 31.2310,
            lon: 121.4745,
            ele: 4.5,
        },
        // 400 s of silence: the track splits here instead of interpolating
        CanonicalRecord {
            timestamp: 1_700_000_405.0,
            lat: 31.2400,
            lon: 121.4800,
            ele: 6.0,
        },
    ];

    let options = ConvertOptions::default();
    let (track, generated) = build_track(&records, "demo", &options);

    eprintln!(
        "{} segment(s), {} point(s) total, {} from interpolation",
        track.segments.len(),
        track.point_count(),
        generated
    );

    let mut out = Vec::new();
    write_gpx(&track, &mut out)?;
    print!("{}", String::from_utf8_lossy(&out));
    Ok(())
}
