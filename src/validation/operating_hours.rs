//! Operating-hours validation.
//!
//! Every shift must fall inside the shop's configured daily open/close
//! window. The window is uniform across days and is injected as an explicit
//! value rather than read from ambient state.

use crate::config::OperatingHours;
use crate::error::{RosterError, RosterResult};
use crate::models::TimeOfDay;

/// Returns true iff the proposed interval lies within the operating window.
///
/// The comparison is inclusive at both ends: a shift may start exactly at
/// opening time and end exactly at closing time.
///
/// # Examples
///
/// ```
/// use roster_engine::config::OperatingHours;
/// use roster_engine::validation::is_within_operating_hours;
///
/// let hours = OperatingHours {
///     open: "09:00".parse().unwrap(),
///     close: "21:00".parse().unwrap(),
/// };
/// assert!(is_within_operating_hours(
///     "09:00".parse().unwrap(),
///     "17:00".parse().unwrap(),
///     &hours,
/// ));
/// assert!(!is_within_operating_hours(
///     "08:30".parse().unwrap(),
///     "17:00".parse().unwrap(),
///     &hours,
/// ));
/// ```
pub fn is_within_operating_hours(
    start: TimeOfDay,
    end: TimeOfDay,
    hours: &OperatingHours,
) -> bool {
    !start.is_before(hours.open) && !hours.close.is_before(end)
}

/// Checks the operating-hours gate, failing with `OutsideOperatingHours`.
///
/// This gate runs before the availability-containment check and is
/// independent of it: availability outside opening hours can never yield an
/// approvable shift.
pub fn check_operating_hours(
    start: TimeOfDay,
    end: TimeOfDay,
    hours: &OperatingHours,
) -> RosterResult<()> {
    if is_within_operating_hours(start, end, hours) {
        Ok(())
    } else {
        Err(RosterError::OutsideOperatingHours {
            start,
            end,
            open: hours.open,
            close: hours.close,
        })
    }
}
