//! Availability-containment validation.
//!
//! A shift can only be approved when it fits entirely inside at least one of
//! the staff member's submitted availability windows for that day.

use chrono::Weekday;

use crate::error::{RosterError, RosterResult};
use crate::models::{Availability, TimeOfDay, TimeRange};

/// Returns true iff some range fully contains the proposed interval.
///
/// Containment is non-strict, so a shift may exactly match a range's
/// boundaries. With no ranges at all the answer is always false. The ranges
/// themselves are taken as-is: overlapping or malformed availability entries
/// are not rejected here.
///
/// # Examples
///
/// ```
/// use roster_engine::models::TimeRange;
/// use roster_engine::validation::is_within_availability;
///
/// let ranges = vec![TimeRange::new("09:00".parse().unwrap(), "17:00".parse().unwrap())];
/// assert!(is_within_availability(
///     "10:00".parse().unwrap(),
///     "14:00".parse().unwrap(),
///     &ranges,
/// ));
/// assert!(!is_within_availability(
///     "10:00".parse().unwrap(),
///     "14:00".parse().unwrap(),
///     &[],
/// ));
/// ```
pub fn is_within_availability(start: TimeOfDay, end: TimeOfDay, ranges: &[TimeRange]) -> bool {
    let proposed = TimeRange::new(start, end);
    ranges.iter().any(|range| range.contains(&proposed))
}

/// Checks the availability gate, failing with `OutsideAvailability`.
pub fn check_availability(
    start: TimeOfDay,
    end: TimeOfDay,
    ranges: &[TimeRange],
) -> RosterResult<()> {
    if is_within_availability(start, end, ranges) {
        Ok(())
    } else {
        Err(RosterError::OutsideAvailability { start, end })
    }
}

/// Collects one staff member's submitted availability windows for one day.
///
/// Draft records are invisible to rostering, so only submitted records
/// contribute. Ranges are flattened across matching records in the order
/// they appear.
pub fn submitted_ranges(
    records: &[Availability],
    staff_id: &str,
    day: Weekday,
) -> Vec<TimeRange> {
    records
        .iter()
        .filter(|record| {
            record.staff_id == staff_id && record.day_of_week == day && record.is_submitted()
        })
        .flat_map(|record| record.time_ranges.iter().copied())
        .collect()
}
