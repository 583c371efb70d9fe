//! Track layout service entry point.
//! Clips events to single days, orders the slices deterministically, and
//! assigns them to tracks grouped into clusters of mutually overlapping
//! segments, organized across focused submodules.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod assignment;
pub mod ordering;
pub mod overlap;
pub mod segmenter;

pub use assignment::{assign, Assignment, Cluster, TrackPosition};
pub use ordering::order;
pub use overlap::overlaps;
pub use segmenter::classify;

use crate::models::event::Event;
use crate::models::segment::{DaySegment, SegmentKind};

/// The complete layout result for one displayed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Whole-day segments, rendered in the separate ribbon lane
    pub whole_day: Vec<DaySegment>,
    /// Track and cluster placement for every task and timed segment
    pub assignment: Assignment,
}

/// Compute the full layout for a single displayed day.
///
/// Everything is rebuilt from scratch: segments, clusters, and tracks are
/// scoped to this one call and never shared across days, so independent
/// callers may compute different days in parallel.
pub fn layout_day(events: &[Event], day: NaiveDate) -> Result<DayLayout> {
    let segments = classify(events, day)?;
    let (whole_day, tracked): (Vec<_>, Vec<_>) = segments
        .into_iter()
        .partition(|s| s.kind == SegmentKind::WholeDay);

    let ordered = order(tracked);
    let assignment = assign(ordered);

    log::debug!(
        "layout for {}: {} whole-day, {} tracked segments in {} clusters",
        day,
        whole_day.len(),
        assignment.segment_count(),
        assignment.clusters().len()
    );

    Ok(DayLayout {
        whole_day,
        assignment,
    })
}

/// Compute layouts for `days` consecutive days starting at `first_day`.
///
/// Week-style views drive the same per-day computation across their
/// columns; each day is computed independently.
pub fn layout_range(
    events: &[Event],
    first_day: NaiveDate,
    days: u32,
) -> Result<Vec<(NaiveDate, DayLayout)>> {
    (0..days)
        .map(|offset| {
            let day = first_day + Duration::days(i64::from(offset));
            layout_day(events, day).map(|layout| (day, layout))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn local(d: u32, h: u32, min: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_layout_day_partitions_whole_day_events() {
        let events = vec![
            Event::all_day_span(1, "Conference", local(3, 0, 0), local(4, 0, 0)),
            Event::timed(2, "Meeting", local(3, 9, 0), local(3, 10, 0)),
        ];

        let layout = layout_day(&events, day(3)).unwrap();

        assert_eq!(layout.whole_day.len(), 1);
        assert_eq!(layout.whole_day[0].event_id, 1);
        assert_eq!(layout.assignment.segment_count(), 1);
        assert!(layout.assignment.position(1).is_none());
        assert!(layout.assignment.position(2).is_some());
    }

    #[test]
    fn test_layout_day_empty() {
        let layout = layout_day(&[], day(3)).unwrap();

        assert!(layout.whole_day.is_empty());
        assert!(layout.assignment.is_empty());
        assert!(layout.assignment.clusters().is_empty());
    }

    #[test]
    fn test_layout_day_rejects_malformed_event() {
        let events = vec![Event::timed(1, "Backwards", local(3, 10, 0), local(3, 9, 0))];

        assert!(layout_day(&events, day(3)).is_err());
    }

    #[test]
    fn test_layout_day_is_deterministic() {
        let events = vec![
            Event::timed(1, "A", local(3, 8, 0), local(3, 11, 30)),
            Event::timed(2, "B", local(3, 8, 30), local(3, 10, 0)),
            Event::task(3, "C", local(3, 8, 30)),
        ];

        let first = layout_day(&events, day(3)).unwrap();
        let second = layout_day(&events, day(3)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_range_covers_each_day_independently() {
        let events = vec![
            Event::timed(1, "Spanning", local(3, 20, 0), local(5, 8, 0)),
            Event::timed(2, "Tuesday only", local(4, 9, 0), local(4, 10, 0)),
        ];

        let layouts = layout_range(&events, day(3), 4).unwrap();

        assert_eq!(layouts.len(), 4);
        assert_eq!(layouts[0].0, day(3));
        assert_eq!(layouts[0].1.assignment.segment_count(), 1);
        assert_eq!(layouts[1].1.assignment.segment_count(), 2);
        assert_eq!(layouts[2].1.assignment.segment_count(), 1);
        assert_eq!(layouts[3].1.assignment.segment_count(), 0);
    }

    #[test]
    fn test_layout_range_spanning_event_flags() {
        let events = vec![Event::timed(1, "Offsite", local(3, 18, 0), local(5, 11, 0))];

        let layouts = layout_range(&events, day(3), 3).unwrap();

        let segment_for = |idx: usize| {
            let (_, layout) = &layouts[idx];
            let cluster = &layout.assignment.clusters()[0];
            cluster.tracks[0][0].clone()
        };

        assert!(segment_for(0).is_first);
        assert!(!segment_for(0).is_last);
        assert!(segment_for(1).is_intermediate());
        assert!(segment_for(2).is_last);
    }
}
