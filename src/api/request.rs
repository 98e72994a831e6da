//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the shift approval
//! and weekly payroll endpoints. All roster data arrives in the request
//! body, already read from storage by the caller; the engine never queries
//! anything itself.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    RosterWeek, Shift, ShiftStatus, StaffMember, StaffRole, TimeOfDay, TimeRange, Timesheet,
    TimesheetStatus,
};
use crate::payroll::PayRateResolutionPolicy;

/// Request body for the `/roster/shifts` endpoint.
///
/// Proposes a shift for one staff member on one day of a week, either as a
/// fresh approval or as an edit of an existing rostered shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftApprovalRequest {
    /// The admin approving or editing the shift.
    pub admin_id: String,
    /// The staff member the shift is for.
    pub staff_id: String,
    /// Any date in the target week; snaps to that week's Monday.
    pub week: RosterWeek,
    /// The day of the week the shift falls on.
    pub day_of_week: Weekday,
    /// Proposed start time.
    pub start_time: TimeOfDay,
    /// Proposed end time.
    pub end_time: TimeOfDay,
    /// The staff member's submitted availability ranges for that day.
    #[serde(default)]
    pub availability: Vec<TimeRange>,
    /// The approved shifts already rostered for that day.
    #[serde(default)]
    pub existing_shifts: Vec<ExistingShiftRequest>,
    /// When editing, the id of the shift being changed; it must appear in
    /// `existing_shifts`.
    #[serde(default)]
    pub editing_shift_id: Option<String>,
}

/// An already-approved shift supplied for the overlap check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member rostered to the shift.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The rostered start time.
    pub start_time: TimeOfDay,
    /// The rostered end time.
    pub end_time: TimeOfDay,
    /// The admin who approved the shift.
    pub approved_by: String,
    /// When the shift was approved.
    pub approved_at: DateTime<Utc>,
}

impl From<ExistingShiftRequest> for Shift {
    fn from(req: ExistingShiftRequest) -> Self {
        Shift {
            id: req.id,
            staff_id: req.staff_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            status: ShiftStatus::Approved,
            approved_by: req.approved_by,
            approved_at: req.approved_at,
        }
    }
}

/// Request body for the `/payroll/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Any date in the week to report on; snaps to that week's Monday.
    pub week: RosterWeek,
    /// The staff roster; every entry appears in the report.
    #[serde(default)]
    pub staff: Vec<StaffMemberRequest>,
    /// The week's timesheets in any status.
    #[serde(default)]
    pub timesheets: Vec<TimesheetRequest>,
    /// How hourly rates are resolved; defaults to the current rate.
    #[serde(default)]
    pub rate_policy: PayRateResolutionPolicy,
}

/// Staff member information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMemberRequest {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The role held by this user.
    #[serde(default = "default_role")]
    pub role: StaffRole,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
    /// Whether the staff member is currently active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_role() -> StaffRole {
    StaffRole::Staff
}

fn default_active() -> bool {
    true
}

impl From<StaffMemberRequest> for StaffMember {
    fn from(req: StaffMemberRequest) -> Self {
        StaffMember {
            id: req.id,
            name: req.name,
            role: req.role,
            hourly_rate: req.hourly_rate,
            is_active: req.is_active,
        }
    }
}

/// Timesheet information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
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
    /// Hourly rate captured at approval, when recorded.
    #[serde(default)]
    pub rate_at_approval: Option<Decimal>,
}

impl From<TimesheetRequest> for Timesheet {
    fn from(req: TimesheetRequest) -> Self {
        Timesheet {
            id: req.id,
            staff_id: req.staff_id,
            shift_id: req.shift_id,
            date: req.date,
            week: req.week,
            rostered_start: req.rostered_start,
            rostered_end: req.rostered_end,
            worked_start: req.worked_start,
            worked_end: req.worked_end,
            status: req.status,
            rate_at_approval: req.rate_at_approval,
        }
    }
}
