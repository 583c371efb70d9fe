//! Deterministic processing order for a day's task and timed segments.

use std::cmp::Ordering;

use crate::models::segment::{DaySegment, SegmentKind};

/// Sort segments into the sequence the track assigner consumes.
///
/// Earliest start first; timed segments before tasks on equal starts;
/// longer segments before shorter ones when start and kind still tie
/// (task duration counts as zero). The sort is stable, so fully tied
/// segments keep their input order.
pub fn order(mut segments: Vec<DaySegment>) -> Vec<DaySegment> {
    segments.sort_by(compare);
    segments
}

fn compare(a: &DaySegment, b: &DaySegment) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| b.duration().cmp(&a.duration()))
}

// Timed segments claim their track before tasks sharing the same start.
fn kind_rank(kind: SegmentKind) -> u8 {
    match kind {
        SegmentKind::Timed => 0,
        SegmentKind::Task => 1,
        SegmentKind::WholeDay => 2,
    }
}
