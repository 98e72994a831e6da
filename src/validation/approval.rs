//! Shift approval sequencing.
//!
//! Approving or editing a rostered shift runs the full gate sequence:
//! operating hours, start/end ordering, availability containment, then
//! overlap against the staff member's other approved shifts that day. The
//! first failing gate short-circuits with its specific error and nothing is
//! committed. On success the caller receives the approved [`Shift`] record,
//! ready for an atomic commit by the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::OperatingHours;
use crate::error::{RosterError, RosterResult};
use crate::models::{RosterAuditLog, Shift, ShiftStatus, TimeOfDay, TimeRange};

use super::availability::check_availability;
use super::operating_hours::check_operating_hours;
use super::overlap::check_no_overlap;

/// A proposed shift, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftProposal {
    /// The staff member the shift is for.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The proposed start time.
    pub start_time: TimeOfDay,
    /// The proposed end time.
    pub end_time: TimeOfDay,
}

impl ShiftProposal {
    /// Returns the proposed interval as a range.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// Checks that `start` is strictly before `end`.
///
/// Zero-length and inverted intervals are both rejected; there is no
/// overnight wraparound.
pub fn check_ordering(start: TimeOfDay, end: TimeOfDay) -> RosterResult<()> {
    if start.is_before(end) {
        Ok(())
    } else {
        Err(RosterError::StartNotBeforeEnd { start, end })
    }
}

/// Runs every validation gate for a proposed shift.
///
/// `existing` may hold any set of approved shifts; only those belonging to
/// the proposal's staff member on the proposal's date participate in the
/// overlap check. `editing_shift_id` excludes the shift currently being
/// edited from that check.
pub fn validate_shift(
    proposal: &ShiftProposal,
    availability: &[TimeRange],
    existing: &[Shift],
    hours: &OperatingHours,
    editing_shift_id: Option<&str>,
) -> RosterResult<()> {
    check_operating_hours(proposal.start_time, proposal.end_time, hours)?;
    check_ordering(proposal.start_time, proposal.end_time)?;
    check_availability(proposal.start_time, proposal.end_time, availability)?;

    let candidate = proposal.time_range();
    let same_day_shifts = existing.iter().filter(|shift| {
        shift.staff_id == proposal.staff_id
            && shift.date == proposal.date
            && editing_shift_id != Some(shift.id.as_str())
    });
    check_no_overlap(&candidate, same_day_shifts)
}

/// Validates a proposal and produces the approved shift record.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use roster_engine::config::OperatingHours;
/// use roster_engine::models::TimeRange;
/// use roster_engine::validation::{approve_shift, ShiftProposal};
///
/// let hours = OperatingHours {
///     open: "09:00".parse().unwrap(),
///     close: "21:00".parse().unwrap(),
/// };
/// let proposal = ShiftProposal {
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: "10:00".parse().unwrap(),
///     end_time: "14:00".parse().unwrap(),
/// };
/// let availability = vec![TimeRange::new(
///     "09:00".parse().unwrap(),
///     "17:00".parse().unwrap(),
/// )];
///
/// let shift = approve_shift(
///     "shift_001".to_string(),
///     &proposal,
///     &availability,
///     &[],
///     &hours,
///     "admin_001",
///     Utc::now(),
/// )
/// .unwrap();
/// assert_eq!(shift.staff_id, "staff_001");
/// ```
pub fn approve_shift(
    id: String,
    proposal: &ShiftProposal,
    availability: &[TimeRange],
    existing: &[Shift],
    hours: &OperatingHours,
    approved_by: &str,
    approved_at: DateTime<Utc>,
) -> RosterResult<Shift> {
    validate_shift(proposal, availability, existing, hours, None)?;

    Ok(Shift {
        id,
        staff_id: proposal.staff_id.clone(),
        date: proposal.date,
        start_time: proposal.start_time,
        end_time: proposal.end_time,
        status: ShiftStatus::Approved,
        approved_by: approved_by.to_string(),
        approved_at,
    })
}

/// Validates new times for an existing shift and produces the updated record
/// plus the audit entry for the edit.
///
/// The edited shift itself is excluded from the overlap check so a shift can
/// always be narrowed or nudged within its own slot.
pub fn edit_shift(
    previous: &Shift,
    new_times: TimeRange,
    availability: &[TimeRange],
    existing: &[Shift],
    hours: &OperatingHours,
    admin_id: &str,
    at: DateTime<Utc>,
) -> RosterResult<(Shift, RosterAuditLog)> {
    let proposal = ShiftProposal {
        staff_id: previous.staff_id.clone(),
        date: previous.date,
        start_time: new_times.start,
        end_time: new_times.end,
    };
    validate_shift(&proposal, availability, existing, hours, Some(&previous.id))?;

    let updated = Shift {
        id: previous.id.clone(),
        staff_id: previous.staff_id.clone(),
        date: previous.date,
        start_time: new_times.start,
        end_time: new_times.end,
        status: ShiftStatus::Approved,
        approved_by: admin_id.to_string(),
        approved_at: at,
    };
    let audit = RosterAuditLog::edit(admin_id.to_string(), previous.clone(), updated.clone(), at);

    Ok((updated, audit))
}
