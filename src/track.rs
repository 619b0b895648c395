//! Track assembly from canonical records
//!
//! Sorts records chronologically, splits segments where the time gap exceeds
//! the max-gap threshold, and fills smaller gaps with linearly interpolated
//! points at the configured step resolution.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{CanonicalRecord, Track, TrackPoint, TrackSegment};

/// Conversion thresholds and directory layout.
///
/// `max_gap_seconds` and `interpolation_step` must be positive; the CLI
/// validates user-supplied values before building.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory scanned for `*.csv` input files
    pub input_dir: String,
    /// Directory receiving generated `.gpx` files
    pub output_dir: String,
    /// Gap above which connectivity is assumed lost and a new segment starts
    pub max_gap_seconds: f64,
    /// Minimum time resolution below which no synthetic points are inserted
    pub interpolation_step: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_dir: "input".to_string(),
            output_dir: "output".to_string(),
            max_gap_seconds: 300.0,
            interpolation_step: 1.0,
        }
    }
}

/// Truncate an epoch-seconds value to a whole-second UTC instant
fn epoch_to_utc(ts: f64) -> DateTime<Utc> {
    Utc.timestamp_opt(ts as i64, 0).single().unwrap_or_default()
}

fn point_from(lat: f64, lon: f64, ele: f64, ts: f64) -> TrackPoint {
    TrackPoint {
        lat,
        lon,
        ele,
        time: epoch_to_utc(ts),
    }
}

/// Assemble a Track from canonical records.
///
/// Records with NaN timestamp, lat, or lon are dropped, the rest sorted
/// ascending by timestamp (original order breaks ties). Consecutive pairs
/// closer than the interpolation step are emitted as-is; pairs further
/// apart than the max gap close the current segment and open a new one;
/// anything in between is bridged with `floor(gap / step)` interpolated
/// points. The final record is always emitted into the current segment.
///
/// Returns the track plus the number of points emitted by the as-is and
/// interpolation branches. Gap-boundary and trailing emissions are not
/// counted; the console totals have always worked this way.
pub fn build_track(records: &[CanonicalRecord], name: &str, options: &ConvertOptions) -> (Track, usize) {
    let mut sorted: Vec<&CanonicalRecord> = records.iter().filter(|r| r.is_usable()).collect();
    sorted.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let mut track = Track::new(name);
    if sorted.is_empty() {
        return (track, 0);
    }

    let mut segment = TrackSegment::default();
    let mut count_generated = 0usize;

    for pair in sorted.windows(2) {
        let (curr, next) = (pair[0], pair[1]);
        let gap = next.timestamp - curr.timestamp;

        if gap > options.max_gap_seconds {
            // Connectivity lost: no interpolation across this boundary
            segment.points.push(point_from(curr.lat, curr.lon, curr.ele, curr.timestamp));
            track.segments.push(std::mem::take(&mut segment));
            continue;
        }

        if gap <= options.interpolation_step {
            // Already at or below step resolution
            segment.points.push(point_from(curr.lat, curr.lon, curr.ele, curr.timestamp));
            count_generated += 1;
            continue;
        }

        let steps = (gap / options.interpolation_step) as u64;
        for step in 0..steps {
            let fraction = step as f64 / steps as f64;
            let lat = curr.lat + (next.lat - curr.lat) * fraction;
            let lon = curr.lon + (next.lon - curr.lon) * fraction;
            let ele = curr.ele + (next.ele - curr.ele) * fraction;
            // Synthesized times advance in whole seconds from the pair
            // start rather than dividing the true gap; kept for output
            // compatibility with existing consumers.
            segment.points.push(point_from(lat, lon, ele, curr.timestamp + step as f64));
            count_generated += 1;
        }
    }

    let last = sorted[sorted.len() - 1];
    segment.points.push(point_from(last.lat, last.lon, last.ele, last.timestamp));
    track.segments.push(segment);

    (track, count_generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ts: f64, lat: f64, lon: f64, ele: f64) -> CanonicalRecord {
        CanonicalRecord {
            timestamp: ts,
            lat,
            lon,
            ele,
        }
    }

    fn all_points(track: &Track) -> Vec<&TrackPoint> {
        track.segments.iter().flat_map(|s| s.points.iter()).collect()
    }

    #[test]
    fn empty_input_yields_empty_track() {
        let (track, count) = build_track(&[], "empty", &ConvertOptions::default());
        assert!(track.segments.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn all_unusable_records_yield_empty_track() {
        let records = vec![record(f64::NAN, 31.2, 121.5, 0.0)];
        let (track, count) = build_track(&records, "nan", &ConvertOptions::default());
        assert!(track.segments.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn single_record_emits_one_point() {
        let records = vec![record(1_700_000_000.0, 31.2, 121.5, 10.0)];
        let (track, count) = build_track(&records, "single", &ConvertOptions::default());
        assert_eq!(track.segments.len(), 1);
        assert_eq!(track.point_count(), 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn ten_second_gap_interpolates_ten_points() {
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_010.0, 32.0, 122.0, 10.0),
        ];
        let (track, count) = build_track(&records, "interp", &ConvertOptions::default());
        assert_eq!(track.segments.len(), 1);
        // 10 interpolated points plus the trailing real point
        assert_eq!(track.point_count(), 11);
        assert_eq!(count, 10);

        let points = all_points(&track);
        let first = points[0];
        assert_eq!(first.lat, 31.0);
        // fraction 3/10 at the fourth point
        let fourth = points[3];
        assert!((fourth.lat - 31.3).abs() < 1e-9);
        assert!((fourth.lon - 121.3).abs() < 1e-9);
        assert!((fourth.ele - 3.0).abs() < 1e-9);
    }

    #[test]
    fn interpolated_times_advance_in_whole_seconds() {
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_007.0, 31.7, 121.7, 7.0),
        ];
        let (track, _) = build_track(&records, "times", &ConvertOptions::default());
        let points = all_points(&track);
        for (i, point) in points.iter().enumerate().take(7) {
            assert_eq!(point.time.timestamp(), 1_700_000_000 + i as i64);
        }
    }

    #[test]
    fn large_gap_splits_segments_without_interpolation() {
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_400.0, 32.0, 122.0, 0.0),
        ];
        let (track, count) = build_track(&records, "split", &ConvertOptions::default());
        assert_eq!(track.segments.len(), 2);
        assert_eq!(track.segments[0].points.len(), 1);
        assert_eq!(track.segments[1].points.len(), 1);
        // Boundary and trailing emissions are uncounted
        assert_eq!(count, 0);
    }

    #[test]
    fn gap_exactly_at_threshold_does_not_split() {
        let options = ConvertOptions::default();
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_300.0, 32.0, 122.0, 0.0),
        ];
        let (track, count) = build_track(&records, "edge", &options);
        assert_eq!(track.segments.len(), 1);
        assert_eq!(count, 300);
    }

    #[test]
    fn sub_step_gap_emits_without_synthesis() {
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_000.5, 31.1, 121.1, 0.0),
            record(1_700_000_001.0, 31.2, 121.2, 0.0),
        ];
        let (track, count) = build_track(&records, "dense", &ConvertOptions::default());
        assert_eq!(track.point_count(), 3);
        assert_eq!(count, 2);
    }

    #[test]
    fn records_are_sorted_before_building() {
        let records = vec![
            record(1_700_000_005.0, 32.0, 122.0, 0.0),
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
        ];
        let (track, _) = build_track(&records, "unsorted", &ConvertOptions::default());
        let points = all_points(&track);
        assert_eq!(points[0].lat, 31.0);
        for pair in points.windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn time_is_monotonic_across_segments() {
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_003.0, 31.1, 121.1, 0.0),
            record(1_700_000_500.0, 32.0, 122.0, 0.0),
            record(1_700_000_505.0, 32.1, 122.1, 0.0),
        ];
        let (track, _) = build_track(&records, "mono", &ConvertOptions::default());
        assert_eq!(track.segments.len(), 2);
        let points = all_points(&track);
        for pair in points.windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn intra_segment_gaps_stay_below_threshold() {
        let options = ConvertOptions::default();
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_200.0, 31.5, 121.5, 0.0),
            record(1_700_000_900.0, 32.0, 122.0, 0.0),
        ];
        let (track, _) = build_track(&records, "gaps", &options);
        for segment in &track.segments {
            for pair in segment.points.windows(2) {
                let gap = (pair[1].time - pair[0].time).num_seconds();
                assert!(gap as f64 <= options.max_gap_seconds);
            }
        }
    }

    #[test]
    fn custom_step_changes_interpolation_count() {
        let options = ConvertOptions {
            interpolation_step: 5.0,
            ..Default::default()
        };
        let records = vec![
            record(1_700_000_000.0, 31.0, 121.0, 0.0),
            record(1_700_000_012.0, 32.0, 122.0, 0.0),
        ];
        // floor(12 / 5) = 2 interpolated points plus the trailing one
        let (track, count) = build_track(&records, "step", &options);
        assert_eq!(count, 2);
        assert_eq!(track.point_count(), 3);
    }
}
