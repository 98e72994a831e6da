//! Availability model and related types.
//!
//! Staff submit one availability record per (week, day of week) pair. A
//! submission replaces whatever was recorded for that day before; the engine
//! never merges ranges across submissions.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::time::TimeRange;
use super::week::RosterWeek;

/// Submission status of an availability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// Saved but not yet visible to admins.
    Draft,
    /// Submitted for rostering.
    Submitted,
}

/// A staff member's willingness to work on one day of one week.
///
/// Holds zero or more time ranges; caller ordering is irrelevant and the
/// ranges are not checked for internal consistency. Overlapping or malformed
/// ranges are accepted as-is and only matter at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// The staff member who submitted this availability.
    pub staff_id: String,
    /// The week this availability applies to.
    pub week: RosterWeek,
    /// The day of the week within that week.
    pub day_of_week: Weekday,
    /// The windows the staff member is willing to work.
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
    /// Whether this availability recurs into following weeks.
    #[serde(default)]
    pub is_recurring: bool,
    /// The submission status.
    pub status: AvailabilityStatus,
    /// When the record was submitted, if it has been.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Availability {
    /// Returns true once the record has been submitted for rostering.
    pub fn is_submitted(&self) -> bool {
        self.status == AvailabilityStatus::Submitted
    }

    /// Marks a draft as submitted at the given instant.
    pub fn submit(&mut self, at: DateTime<Utc>) {
        self.status = AvailabilityStatus::Submitted;
        self.submitted_at = Some(at);
    }
}
