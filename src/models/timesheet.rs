//! Timesheet model and related types.
//!
//! A timesheet records the time actually worked against one approved shift.
//! At most one timesheet exists per shift. Staff create it with their worked
//! times; admins approve, adjust or reject it. Payroll derives exclusively
//! from approved timesheets — rostered intervals and pending or rejected
//! timesheets never contribute to pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift::Shift;
use super::time::{TimeOfDay, TimeRange};
use super::week::RosterWeek;

/// Review status of a timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    /// Submitted by staff, awaiting admin review.
    Pending,
    /// Approved by an admin; counts toward payroll.
    Approved,
    /// Rejected by an admin; excluded from payroll.
    Rejected,
}

/// A staff-submitted record of actually-worked time for one approved shift.
///
/// The rostered interval is a denormalized copy taken from the shift at
/// submission time, so later roster edits do not rewrite what was agreed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Unique identifier for the timesheet.
    pub id: String,
    /// The staff member who worked the shift.
    pub staff_id: String,
    /// The shift this timesheet reports against.
    pub shift_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The week the shift falls in.
    pub week: RosterWeek,
    /// Copy of the rostered start at submission time.
    pub rostered_start: TimeOfDay,
    /// Copy of the rostered end at submission time.
    pub rostered_end: TimeOfDay,
    /// The start of the time actually worked.
    pub worked_start: TimeOfDay,
    /// The end of the time actually worked.
    pub worked_end: TimeOfDay,
    /// The review status.
    pub status: TimesheetStatus,
    /// Hourly rate captured when an admin approved this timesheet, used by
    /// the snapshot pay-rate policy.
    #[serde(default)]
    pub rate_at_approval: Option<Decimal>,
}

impl Timesheet {
    /// Creates a pending timesheet for a shift with the given worked times.
    ///
    /// Copies the shift's rostered interval so the submission stays
    /// comparable against what was originally approved.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Utc};
    /// use roster_engine::models::{Shift, ShiftStatus, TimeRange, Timesheet, TimesheetStatus};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     staff_id: "staff_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: "09:00".parse().unwrap(),
    ///     end_time: "17:00".parse().unwrap(),
    ///     status: ShiftStatus::Approved,
    ///     approved_by: "admin_001".to_string(),
    ///     approved_at: Utc::now(),
    /// };
    /// let worked = TimeRange::new("09:05".parse().unwrap(), "17:10".parse().unwrap());
    /// let timesheet = Timesheet::submit("ts_001".to_string(), &shift, worked);
    /// assert_eq!(timesheet.status, TimesheetStatus::Pending);
    /// assert_eq!(timesheet.rostered_start, shift.start_time);
    /// ```
    pub fn submit(id: String, shift: &Shift, worked: TimeRange) -> Self {
        Self {
            id,
            staff_id: shift.staff_id.clone(),
            shift_id: shift.id.clone(),
            date: shift.date,
            week: RosterWeek::containing(shift.date),
            rostered_start: shift.start_time,
            rostered_end: shift.end_time,
            worked_start: worked.start,
            worked_end: worked.end,
            status: TimesheetStatus::Pending,
            rate_at_approval: None,
        }
    }

    /// Approves the timesheet, capturing the staff member's rate at this
    /// instant for the snapshot pay-rate policy.
    pub fn approve(&mut self, current_rate: Decimal) {
        self.status = TimesheetStatus::Approved;
        self.rate_at_approval = Some(current_rate);
    }

    /// Adjusts the worked interval and approves in one step, the admin
    /// correction flow.
    pub fn approve_adjusted(&mut self, worked: TimeRange, current_rate: Decimal) {
        self.worked_start = worked.start;
        self.worked_end = worked.end;
        self.approve(current_rate);
    }

    /// Rejects the timesheet, excluding it from payroll.
    pub fn reject(&mut self) {
        self.status = TimesheetStatus::Rejected;
        self.rate_at_approval = None;
    }

    /// Returns the worked interval as a range.
    pub fn worked_range(&self) -> TimeRange {
        TimeRange::new(self.worked_start, self.worked_end)
    }

    /// Returns the rostered interval copied at submission time.
    pub fn rostered_range(&self) -> TimeRange {
        TimeRange::new(self.rostered_start, self.rostered_end)
    }

    /// Returns the worked duration in hours, negative for inverted entries.
    ///
    /// No validation happens here; data quality is enforced upstream at
    /// submission time.
    pub fn worked_hours(&self) -> Decimal {
        self.worked_range().duration_hours()
    }

    /// Returns true iff this timesheet counts toward payroll.
    pub fn is_approved(&self) -> bool {
        self.status == TimesheetStatus::Approved
    }
}
