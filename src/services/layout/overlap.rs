//! Collision predicate for clipped day segments.

use crate::models::segment::DaySegment;

/// Do two segments collide for layout purposes?
///
/// Half-open interval intersection with one special case: segments sharing
/// an identical start instant always collide, even when a strict `<`
/// comparison would let a zero-width segment slip through. Tasks contribute
/// their nominal footprint as the end (see
/// [`DaySegment::effective_end`]).
pub fn overlaps(placed: &DaySegment, candidate: &DaySegment) -> bool {
    (placed.start == candidate.start || placed.start < candidate.effective_end())
        && placed.effective_end() > candidate.start
}
