//! Day segment model.
//!
//! A segment is the slice of an event that falls on a single calendar day,
//! the unit the track engine actually places. Times are naive local values
//! matching the day grid they are rendered on.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Nominal footprint, in minutes, granted to open-ended tasks when testing
/// for collisions. A task's displayed duration stays zero; the footprint
/// only keeps other segments from sharing its track.
pub const TASK_FOOTPRINT_MINUTES: i64 = 10;

/// Classification of a day segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Rendered once per day in the all-day ribbon, outside the track engine
    WholeDay,
    /// Open-ended: has a start but no end; appears only on its start day
    Task,
    /// Has both start and end; may be clipped across multiple days
    Timed,
}

/// The slice of an event that falls on one calendar day.
///
/// Exactly one segment exists per (event, day-it-touches) pair, so within
/// a single day the owning event's id doubles as the segment's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySegment {
    /// Identity of the owning event (no ownership implied)
    pub event_id: i64,
    pub kind: SegmentKind,
    pub start: NaiveDateTime,
    /// Always present for Timed segments, never for Task segments
    pub end: Option<NaiveDateTime>,
    /// True when this slice begins at the event's real start
    pub is_first: bool,
    /// True when this slice ends at the event's real end
    pub is_last: bool,
}

impl DaySegment {
    /// True for the middle slices of an event spanning three or more days.
    pub fn is_intermediate(&self) -> bool {
        !self.is_first && !self.is_last
    }

    /// End instant used for collision detection. Tasks have no real end,
    /// so they borrow a nominal footprint instead.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end
            .unwrap_or_else(|| self.start + Duration::minutes(TASK_FOOTPRINT_MINUTES))
    }

    /// Displayed duration; zero for tasks.
    pub fn duration(&self) -> Duration {
        match self.end {
            Some(end) => end - self.start,
            None => Duration::zero(),
        }
    }

    /// Validate kind/field consistency.
    ///
    /// The segmenter only produces consistent segments; this guards hosts
    /// that construct segments by hand before feeding them to the engine.
    pub fn validate(&self) -> Result<(), SegmentValidationError> {
        match self.kind {
            SegmentKind::Task if self.end.is_some() => {
                return Err(SegmentValidationError::TaskWithEnd);
            }
            SegmentKind::Timed if self.end.is_none() => {
                return Err(SegmentValidationError::TimedWithoutEnd);
            }
            _ => {}
        }

        if let Some(end) = self.end {
            if end < self.start {
                return Err(SegmentValidationError::EndBeforeStart);
            }
        }

        Ok(())
    }
}

/// Validation errors for DaySegment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentValidationError {
    TaskWithEnd,
    TimedWithoutEnd,
    EndBeforeStart,
}

impl std::fmt::Display for SegmentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskWithEnd => write!(f, "Task segments cannot carry an end time"),
            Self::TimedWithoutEnd => write!(f, "Timed segments must carry an end time"),
            Self::EndBeforeStart => write!(f, "Segment end time cannot be before its start time"),
        }
    }
}

impl std::error::Error for SegmentValidationError {}
