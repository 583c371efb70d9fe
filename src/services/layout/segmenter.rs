//! Clips raw events to a single calendar day and classifies the slices.
//!
//! Whole-day segments go to the ribbon lane and skip the track pipeline;
//! task segments appear only on their start day; timed segments are clipped
//! to the day's half-open `[midnight, next midnight)` window.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::Event;
use crate::models::segment::{DaySegment, SegmentKind};
use crate::utils::date::{day_end, day_start};

/// Produce one `DaySegment` per event intersecting `[day, day + 1)`.
///
/// Malformed events (end before start, empty title) fail the whole call.
/// Clamping a bad interval here would silently shift every later track
/// placement, so the caller gets an error instead.
pub fn classify(events: &[Event], day: NaiveDate) -> Result<Vec<DaySegment>> {
    let window_start = day_start(day);
    let window_end = day_end(day);

    let mut segments = Vec::new();
    for event in events {
        event
            .validate()
            .map_err(|e| anyhow!("event {}: {}", event.id, e))?;

        let start = event.start.naive_local();
        let end = event.end.map(|e| e.naive_local());

        if event.all_day {
            if let Some(segment) = whole_day_segment(event.id, start, end, window_start, window_end)
            {
                segments.push(segment);
            }
            continue;
        }

        let Some(end) = end else {
            // Open-ended task: only on its start day, start kept unclipped.
            if start.date() == day {
                segments.push(DaySegment {
                    event_id: event.id,
                    kind: SegmentKind::Task,
                    start,
                    end: None,
                    is_first: true,
                    is_last: true,
                });
            }
            continue;
        };

        if !intersects_window(start, end, window_start, window_end) {
            continue;
        }

        let clipped_start = if start >= window_start { start } else { window_start };
        let clipped_end = if end <= window_end { end } else { window_end };

        segments.push(DaySegment {
            event_id: event.id,
            kind: SegmentKind::Timed,
            start: clipped_start,
            end: Some(clipped_end),
            is_first: clipped_start == start,
            is_last: clipped_end == end,
        });
    }

    Ok(segments)
}

/// Half-open intersection against the day window.
///
/// An event ending exactly at midnight belongs to the day that ends there,
/// and a zero-width event belongs to the day containing its start instant.
fn intersects_window(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> bool {
    if start == end {
        return start >= window_start && start < window_end;
    }
    start < window_end && end > window_start
}

/// All-day events keep their unclipped span; the ribbon lane renders them
/// whole on every day they touch, with `is_first`/`is_last` marking the
/// real edges.
fn whole_day_segment(
    event_id: i64,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Option<DaySegment> {
    let touches = match end {
        Some(end) => intersects_window(start, end, window_start, window_end),
        None => start >= window_start && start < window_end,
    };
    if !touches {
        return None;
    }

    Some(DaySegment {
        event_id,
        kind: SegmentKind::WholeDay,
        start,
        end,
        is_first: start >= window_start,
        is_last: end.map_or(true, |e| e <= window_end),
    })
}
