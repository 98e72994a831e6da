//! Roster week model.
//!
//! Rostering, availability and payroll all operate on Monday-anchored weeks.
//! [`RosterWeek`] normalizes any calendar date to the Monday that starts its
//! week, mirroring how availability submissions and payroll reports are keyed.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A calendar week starting on Monday.
///
/// Serialized as the start date, so any date deserializes to the week
/// containing it.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use roster_engine::models::RosterWeek;
///
/// // 2026-01-15 is a Thursday; its week starts Monday 2026-01-12.
/// let week = RosterWeek::containing(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week.date_of(Weekday::Sun), NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveDate", into = "NaiveDate")]
pub struct RosterWeek {
    start: NaiveDate,
}

impl RosterWeek {
    /// Returns the week containing `date`, snapping back to its Monday.
    pub fn containing(date: NaiveDate) -> Self {
        let days_from_monday = u64::from(date.weekday().num_days_from_monday());
        let start = date
            .checked_sub_days(Days::new(days_from_monday))
            .unwrap_or(date);
        Self { start }
    }

    /// Returns the Monday that starts this week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the Sunday that ends this week (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.start.checked_add_days(Days::new(6)).unwrap_or(self.start)
    }

    /// Resolves a weekday to its calendar date within this week.
    pub fn date_of(&self, weekday: Weekday) -> NaiveDate {
        let offset = u64::from(weekday.num_days_from_monday());
        self.start.checked_add_days(Days::new(offset)).unwrap_or(self.start)
    }

    /// Checks if a date falls within this week (inclusive of both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// Returns the following week.
    pub fn next(&self) -> Self {
        Self {
            start: self.start.checked_add_days(Days::new(7)).unwrap_or(self.start),
        }
    }

    /// Returns the preceding week.
    pub fn previous(&self) -> Self {
        Self {
            start: self.start.checked_sub_days(Days::new(7)).unwrap_or(self.start),
        }
    }
}

impl From<NaiveDate> for RosterWeek {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl From<RosterWeek> for NaiveDate {
    fn from(week: RosterWeek) -> Self {
        week.start
    }
}
