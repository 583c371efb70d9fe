// Event module
// Host-facing calendar event model read by the layout engine

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A calendar event as supplied by the host's event store.
///
/// The layout engine only reads events; ownership stays with the host.
/// An event without an `end` is an open-ended task and appears only on
/// its start day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identity assigned by the host (database key or similar)
    pub id: i64,
    pub title: String,
    pub start: DateTime<Local>,
    /// Absent for open-ended tasks
    pub end: Option<DateTime<Local>>,
    pub all_day: bool,
}

impl Event {
    /// Create a timed event with both start and end.
    ///
    /// # Examples
    /// ```
    /// use calendar_tracks::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::timed(1, "Team Meeting", start, end);
    /// assert!(event.validate().is_ok());
    /// ```
    pub fn timed(
        id: i64,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end: Some(end),
            all_day: false,
        }
    }

    /// Create an open-ended task with a start but no end.
    pub fn task(id: i64, title: impl Into<String>, start: DateTime<Local>) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end: None,
            all_day: false,
        }
    }

    /// Create an all-day event spanning `start..end`.
    pub fn all_day_span(
        id: i64,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end: Some(end),
            all_day: true,
        }
    }

    /// Validate the event.
    ///
    /// An end equal to the start is legal: zero-width events are placed on
    /// the day containing their start instant.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if let Some(end) = self.end {
            if end < self.start {
                return Err(EventValidationError::EndBeforeStart);
            }
        }

        Ok(())
    }

    /// Check if this is an open-ended task.
    pub fn is_task(&self) -> bool {
        self.end.is_none() && !self.all_day
    }

    /// Duration of the event; zero for open-ended tasks.
    pub fn duration(&self) -> chrono::Duration {
        match self.end {
            Some(end) => end - self.start,
            None => chrono::Duration::zero(),
        }
    }
}

/// Validation errors for Event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    EndBeforeStart,
}

impl std::fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Event title cannot be empty"),
            Self::EndBeforeStart => write!(f, "Event end time cannot be before its start time"),
        }
    }
}

impl std::error::Error for EventValidationError {}
