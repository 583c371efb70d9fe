// Date utility functions
// Day-boundary helpers shared by the layout engine

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Midnight at the start of `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(0, 0, 0).unwrap()
}

/// Midnight at the start of the following day. The day window is half-open,
/// so this instant belongs to the next day, not to `day`.
pub fn day_end(day: NaiveDate) -> NaiveDateTime {
    day_start(day) + Duration::days(1)
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
