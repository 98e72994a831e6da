//! Shift overlap validation.
//!
//! A staff member cannot hold two approved shifts that intersect on the same
//! day. The test is the standard half-open interval intersection, so shifts
//! that touch exactly at a boundary are allowed back to back.

use crate::error::{RosterError, RosterResult};
use crate::models::{Shift, TimeRange};

/// Returns the first existing shift whose interval intersects `candidate`,
/// or `None` when the candidate is clear.
///
/// The caller supplies the relevant shifts — the same staff member's approved
/// shifts for the same calendar date, minus the shift being edited, if any.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use roster_engine::models::{Shift, ShiftStatus, TimeRange};
/// use roster_engine::validation::find_conflict;
///
/// let existing = vec![Shift {
///     id: "shift_001".to_string(),
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: "09:00".parse().unwrap(),
///     end_time: "13:00".parse().unwrap(),
///     status: ShiftStatus::Approved,
///     approved_by: "admin_001".to_string(),
///     approved_at: Utc::now(),
/// }];
///
/// // Back to back is fine, intersection is not.
/// let clear = TimeRange::new("13:00".parse().unwrap(), "17:00".parse().unwrap());
/// let clash = TimeRange::new("12:00".parse().unwrap(), "17:00".parse().unwrap());
/// assert!(find_conflict(&clear, &existing).is_none());
/// assert!(find_conflict(&clash, &existing).is_some());
/// ```
pub fn find_conflict<'a, I>(candidate: &TimeRange, existing: I) -> Option<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    existing
        .into_iter()
        .find(|shift| candidate.overlaps(&shift.time_range()))
}

/// Checks the overlap gate, failing with `ShiftOverlap` on the first
/// conflicting shift. Any conflict fails the whole operation; nothing is
/// partially applied.
pub fn check_no_overlap<'a, I>(candidate: &TimeRange, existing: I) -> RosterResult<()>
where
    I: IntoIterator<Item = &'a Shift>,
{
    match find_conflict(candidate, existing) {
        None => Ok(()),
        Some(conflict) => Err(RosterError::ShiftOverlap {
            start: candidate.start,
            end: candidate.end,
            existing_start: conflict.start_time,
            existing_end: conflict.end_time,
        }),
    }
}
