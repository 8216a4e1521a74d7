use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{LeagueError, Result};

/// Earliest season a caller can ask the history to start from.
pub const EARLIEST_START_YEAR: i32 = 2002;

/// Month (August) in which a new season begins.
const SEASON_START_MONTH: u32 = 8;

/// Source of "today" for anything that depends on the calendar.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the real date in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Year of the most recent August 1st on or before `today`.
pub fn most_recent_august_start(today: NaiveDate) -> i32 {
    if today.month() < SEASON_START_MONTH {
        today.year() - 1
    } else {
        today.year()
    }
}

/// Start years a caller may pick, from the earliest tracked season up to the current one.
pub fn start_year_range(clock: &impl Clock) -> RangeInclusive<i32> {
    EARLIEST_START_YEAR..=most_recent_august_start(clock.today())
}

/// Parse the leading four digit year of a `"YYYY/YY"` label.
pub fn season_start_year(label: &str) -> Result<i32> {
    label
        .get(..4)
        .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|year| year.parse().ok())
        .ok_or_else(|| LeagueError::MalformedSeasonLabel {
            label: label.to_owned(),
        })
}

/// Build the `"YYYY/YY"` label of the season starting in `start_year`.
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}/{:02}", (start_year + 1).rem_euclid(100))
}
