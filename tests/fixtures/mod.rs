// Test fixtures - reusable test data
// Provides consistent test data across all test files

use calendar_tracks::models::event::Event;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 3, 2025 (a Monday)
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    /// Returns a local instant on Monday Mar 3, 2025
    pub fn monday_at(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 3, hour, minute, 0)
            .unwrap()
    }

    /// Returns a local instant `days` after Monday Mar 3, 2025
    pub fn days_later_at(days: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 3 + days, hour, minute, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// The documented morning rush: seven events chained into one cluster
    /// needing four tracks, plus an isolated afternoon retro.
    pub fn morning_rush() -> Vec<Event> {
        vec![
            Event::timed(1, "Sprint planning", dates::monday_at(8, 0), dates::monday_at(11, 30)),
            Event::timed(2, "Design review", dates::monday_at(8, 30), dates::monday_at(10, 0)),
            Event::timed(3, "One-on-one", dates::monday_at(8, 30), dates::monday_at(9, 30)),
            Event::timed(4, "Workshop", dates::monday_at(9, 0), dates::monday_at(13, 30)),
            Event::timed(5, "Standup", dates::monday_at(10, 30), dates::monday_at(11, 0)),
            Event::timed(6, "Lunch and learn", dates::monday_at(12, 30), dates::monday_at(13, 30)),
            Event::timed(7, "Triage", dates::monday_at(13, 0), dates::monday_at(13, 30)),
            Event::timed(8, "Retro", dates::monday_at(14, 0), dates::monday_at(14, 45)),
        ]
    }

    /// A multi-day offsite spanning three calendar days
    pub fn three_day_offsite() -> Event {
        Event::timed(
            20,
            "Offsite",
            dates::monday_at(18, 0),
            dates::days_later_at(2, 11, 0),
        )
    }

    /// An all-day conference covering Monday and Tuesday
    pub fn two_day_conference() -> Event {
        Event::all_day_span(
            21,
            "Conference",
            dates::monday_at(0, 0),
            dates::days_later_at(2, 0, 0),
        )
    }

    /// An open-ended task in the middle of the morning rush
    pub fn morning_task() -> Event {
        Event::task(22, "Call plumber", dates::monday_at(9, 0))
    }
}
