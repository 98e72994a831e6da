//! Shift model and related types.
//!
//! A shift is an admin-approved work interval for one staff member on one
//! calendar date. Proposals that fail validation are never persisted, so the
//! only status a stored shift can carry is approved.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, TimeRange};

/// Status of a rostered shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift passed validation and was approved by an admin.
    Approved,
}

/// An approved work interval for one staff member on one calendar date.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc, Weekday};
/// use roster_engine::models::{Shift, ShiftStatus};
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), // Thursday
///     start_time: "09:00".parse().unwrap(),
///     end_time: "17:00".parse().unwrap(),
///     status: ShiftStatus::Approved,
///     approved_by: "admin_001".to_string(),
///     approved_at: Utc::now(),
/// };
/// assert_eq!(shift.day_of_week(), Weekday::Thu);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member rostered to work this shift.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The rostered start time.
    pub start_time: TimeOfDay,
    /// The rostered end time.
    pub end_time: TimeOfDay,
    /// The shift status.
    pub status: ShiftStatus,
    /// The admin who approved this shift.
    pub approved_by: String,
    /// When the shift was approved.
    pub approved_at: DateTime<Utc>,
}

impl Shift {
    /// Returns the rostered interval as a range.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }

    /// Returns the rostered duration in hours.
    ///
    /// Rostered time is the plan, not the ground truth for pay; payroll
    /// derives from approved timesheets only.
    pub fn rostered_hours(&self) -> Decimal {
        self.time_range().duration_hours()
    }

    /// Returns the day of the week for the shift date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
