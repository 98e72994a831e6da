//! Weekly hours and gross-pay aggregation.
//!
//! Payroll totals derive exclusively from approved timesheets. Rostered
//! intervals are a plan; worked time, once approved, is the ground truth for
//! pay. Pending and rejected timesheets never contribute.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RosterWeek, StaffMember, Timesheet};

/// How the hourly rate is resolved when aggregating historical timesheets.
///
/// `Current` reproduces the long-standing behavior of using the staff
/// member's rate at aggregation time, which means editing a rate rewrites
/// past payroll reports. `SnapshotAtApproval` pins each timesheet to the
/// rate captured when it was approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRateResolutionPolicy {
    /// Use the staff member's rate at aggregation time.
    #[default]
    Current,
    /// Use the rate captured on the timesheet when it was approved, falling
    /// back to the current rate for timesheets approved before snapshots
    /// were recorded.
    SnapshotAtApproval,
}

/// One staff member's aggregated week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffWeekTotals {
    /// The staff member's id.
    pub staff_id: String,
    /// Display name, or the id when the staff member is not on the roster.
    pub name: String,
    /// The staff member's current hourly rate (zero when unknown).
    pub hourly_rate: Decimal,
    /// Total approved worked hours for the week.
    pub hours: Decimal,
    /// Gross pay for the week: worked hours times the resolved rate, with
    /// no tax or deduction modeling.
    pub gross_pay: Decimal,
}

/// A full weekly payroll report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPayrollSummary {
    /// The week the report covers.
    pub week: RosterWeek,
    /// Per-staff totals: one row per roster entry (zero rows included),
    /// followed by rows for timesheet owners missing from the roster.
    pub staff_totals: Vec<StaffWeekTotals>,
    /// Sum of hours across all rows.
    pub total_hours: Decimal,
    /// Sum of gross pay across all rows.
    pub total_pay: Decimal,
}

/// Aggregates a week of timesheets into per-staff hours and gross pay.
///
/// Only timesheets for `week` with approved status are summed. Durations are
/// summed arithmetically, including negative values from malformed worked
/// intervals — data quality is enforced upstream at submission time, not
/// re-validated at reporting time. The fold is pure and never fails; running
/// it twice over the same input yields identical results.
///
/// Every entry of `roster` appears in the output, with zero hours and pay
/// when the staff member has no approved timesheets in the week.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{RosterWeek, StaffMember, StaffRole};
/// use roster_engine::payroll::{PayRateResolutionPolicy, aggregate_week};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = RosterWeek::containing(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// let roster = vec![StaffMember {
///     id: "staff_001".to_string(),
///     name: "Dana Wells".to_string(),
///     role: StaffRole::Staff,
///     hourly_rate: Decimal::new(2000, 2),
///     is_active: true,
/// }];
///
/// let summary = aggregate_week(week, &[], &roster, PayRateResolutionPolicy::Current);
/// assert_eq!(summary.staff_totals.len(), 1);
/// assert_eq!(summary.staff_totals[0].hours, Decimal::ZERO);
/// assert_eq!(summary.staff_totals[0].gross_pay, Decimal::ZERO);
/// ```
pub fn aggregate_week(
    week: RosterWeek,
    timesheets: &[Timesheet],
    roster: &[StaffMember],
    policy: PayRateResolutionPolicy,
) -> WeeklyPayrollSummary {
    let staff_index: HashMap<&str, &StaffMember> =
        roster.iter().map(|member| (member.id.as_str(), member)).collect();

    let current_rate = |staff_id: &str| {
        staff_index
            .get(staff_id)
            .map(|member| member.hourly_rate)
            .unwrap_or(Decimal::ZERO)
    };

    // Accumulate (hours, pay) per staff id across approved timesheets.
    let mut accumulated: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for timesheet in timesheets {
        if timesheet.week != week || !timesheet.is_approved() {
            continue;
        }

        let rate = match policy {
            PayRateResolutionPolicy::Current => current_rate(&timesheet.staff_id),
            PayRateResolutionPolicy::SnapshotAtApproval => timesheet
                .rate_at_approval
                .unwrap_or_else(|| current_rate(&timesheet.staff_id)),
        };

        let duration = timesheet.worked_hours();
        let entry = accumulated
            .entry(timesheet.staff_id.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += duration;
        entry.1 += duration * rate;
    }

    // Roster rows first, in roster order, then any timesheet owners the
    // roster does not know about.
    let mut staff_totals: Vec<StaffWeekTotals> = roster
        .iter()
        .map(|member| {
            let (hours, pay) = accumulated
                .remove(member.id.as_str())
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            StaffWeekTotals {
                staff_id: member.id.clone(),
                name: member.name.clone(),
                hourly_rate: member.hourly_rate,
                hours,
                gross_pay: pay,
            }
        })
        .collect();

    for (staff_id, (hours, pay)) in accumulated {
        staff_totals.push(StaffWeekTotals {
            staff_id: staff_id.to_string(),
            name: staff_id.to_string(),
            hourly_rate: Decimal::ZERO,
            hours,
            gross_pay: pay,
        });
    }

    let total_hours = staff_totals.iter().map(|row| row.hours).sum();
    let total_pay = staff_totals.iter().map(|row| row.gross_pay).sum();

    WeeklyPayrollSummary {
        week,
        staff_totals,
        total_hours,
        total_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StaffRole, TimesheetStatus};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn week() -> RosterWeek {
        RosterWeek::containing(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
    }

    fn staff(id: &str, name: &str, rate: &str) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: name.to_string(),
            role: StaffRole::Staff,
            hourly_rate: dec(rate),
            is_active: true,
        }
    }

    fn timesheet(
        id: &str,
        staff_id: &str,
        worked_start: &str,
        worked_end: &str,
        status: TimesheetStatus,
    ) -> Timesheet {
        Timesheet {
            id: id.to_string(),
            staff_id: staff_id.to_string(),
            shift_id: format!("shift_{id}"),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            week: week(),
            rostered_start: "09:00".parse().unwrap(),
            rostered_end: "17:00".parse().unwrap(),
            worked_start: worked_start.parse().unwrap(),
            worked_end: worked_end.parse().unwrap(),
            status,
            rate_at_approval: None,
        }
    }

    /// AG-001: approved timesheets sum, rejected excluded
    #[test]
    fn test_sums_approved_and_excludes_rejected() {
        let roster = [staff("staff_a", "Dana Wells", "20.00")];
        let timesheets = [
            timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Approved), // 4.0
            timesheet("ts2", "staff_a", "13:30", "17:00", TimesheetStatus::Approved), // 3.5
            timesheet("ts3", "staff_a", "09:00", "17:00", TimesheetStatus::Rejected), // 8.0 ignored
        ];

        let summary = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);

        assert_eq!(summary.staff_totals.len(), 1);
        assert_eq!(summary.staff_totals[0].hours, dec("7.5"));
        assert_eq!(summary.staff_totals[0].gross_pay, dec("150.00"));
    }

    /// AG-002: pending timesheets are excluded entirely
    #[test]
    fn test_pending_excluded() {
        let roster = [staff("staff_a", "Dana Wells", "20.00")];
        let timesheets = [timesheet(
            "ts1",
            "staff_a",
            "09:00",
            "17:00",
            TimesheetStatus::Pending,
        )];

        let summary = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);

        assert_eq!(summary.staff_totals[0].hours, Decimal::ZERO);
        assert_eq!(summary.staff_totals[0].gross_pay, Decimal::ZERO);
    }

    /// AG-003: staff with no timesheets still get a zero row
    #[test]
    fn test_staff_without_timesheets_appear_with_zeros() {
        let roster = [
            staff("staff_a", "Dana Wells", "20.00"),
            staff("staff_b", "Sam Ortiz", "22.00"),
        ];
        let timesheets = [timesheet(
            "ts1",
            "staff_a",
            "09:00",
            "13:00",
            TimesheetStatus::Approved,
        )];

        let summary = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);

        assert_eq!(summary.staff_totals.len(), 2);
        let sam = &summary.staff_totals[1];
        assert_eq!(sam.staff_id, "staff_b");
        assert_eq!(sam.hours, Decimal::ZERO);
        assert_eq!(sam.gross_pay, Decimal::ZERO);
        // The zero row still carries the current rate for display.
        assert_eq!(sam.hourly_rate, dec("22.00"));
    }

    /// AG-004: negative durations are summed arithmetically
    #[test]
    fn test_negative_duration_summed_not_rejected() {
        let roster = [staff("staff_a", "Dana Wells", "20.00")];
        let timesheets = [
            timesheet("ts1", "staff_a", "09:00", "17:00", TimesheetStatus::Approved), // 8.0
            timesheet("ts2", "staff_a", "17:00", "09:00", TimesheetStatus::Approved), // -8.0
        ];

        let summary = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);

        assert_eq!(summary.staff_totals[0].hours, Decimal::ZERO);
        assert_eq!(summary.staff_totals[0].gross_pay, Decimal::ZERO);
    }

    /// AG-005: aggregation is idempotent over immutable input
    #[test]
    fn test_idempotent() {
        let roster = [
            staff("staff_a", "Dana Wells", "20.00"),
            staff("staff_b", "Sam Ortiz", "22.00"),
        ];
        let timesheets = [
            timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Approved),
            timesheet("ts2", "staff_b", "10:00", "18:30", TimesheetStatus::Approved),
        ];

        let first = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);
        let second = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);
        assert_eq!(first, second);
    }

    /// AG-006: current policy follows the roster's rate at aggregation time
    #[test]
    fn test_current_policy_uses_rate_at_aggregation_time() {
        let mut ts = timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Pending);
        ts.approve(dec("20.00")); // snapshot captured at 20.00

        // The rate was edited to 25.00 after approval.
        let roster = [staff("staff_a", "Dana Wells", "25.00")];

        let summary = aggregate_week(
            week(),
            std::slice::from_ref(&ts),
            &roster,
            PayRateResolutionPolicy::Current,
        );
        assert_eq!(summary.staff_totals[0].gross_pay, dec("100.00")); // 4h * 25.00
    }

    /// AG-007: snapshot policy pins the rate captured at approval
    #[test]
    fn test_snapshot_policy_uses_captured_rate() {
        let mut ts = timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Pending);
        ts.approve(dec("20.00"));

        let roster = [staff("staff_a", "Dana Wells", "25.00")];

        let summary = aggregate_week(
            week(),
            std::slice::from_ref(&ts),
            &roster,
            PayRateResolutionPolicy::SnapshotAtApproval,
        );
        assert_eq!(summary.staff_totals[0].gross_pay, dec("80.00")); // 4h * 20.00
    }

    #[test]
    fn test_snapshot_policy_falls_back_to_current_rate() {
        // Approved before snapshots were recorded: no captured rate.
        let ts = timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Approved);
        let roster = [staff("staff_a", "Dana Wells", "25.00")];

        let summary = aggregate_week(
            week(),
            std::slice::from_ref(&ts),
            &roster,
            PayRateResolutionPolicy::SnapshotAtApproval,
        );
        assert_eq!(summary.staff_totals[0].gross_pay, dec("100.00"));
    }

    /// AG-008: timesheet owners missing from the roster aggregate at rate zero
    #[test]
    fn test_unknown_staff_aggregate_with_zero_rate() {
        let timesheets = [timesheet(
            "ts1",
            "staff_x",
            "09:00",
            "13:00",
            TimesheetStatus::Approved,
        )];

        let summary = aggregate_week(week(), &timesheets, &[], PayRateResolutionPolicy::Current);

        assert_eq!(summary.staff_totals.len(), 1);
        assert_eq!(summary.staff_totals[0].hours, dec("4.0"));
        assert_eq!(summary.staff_totals[0].gross_pay, Decimal::ZERO);
        assert_eq!(summary.staff_totals[0].hourly_rate, Decimal::ZERO);
    }

    #[test]
    fn test_timesheets_outside_week_are_ignored() {
        let roster = [staff("staff_a", "Dana Wells", "20.00")];
        let mut ts = timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Approved);
        ts.week = week().next();
        ts.date = ts.week.start();

        let summary = aggregate_week(
            week(),
            std::slice::from_ref(&ts),
            &roster,
            PayRateResolutionPolicy::Current,
        );
        assert_eq!(summary.staff_totals[0].hours, Decimal::ZERO);
    }

    #[test]
    fn test_grand_totals_sum_all_rows() {
        let roster = [
            staff("staff_a", "Dana Wells", "20.00"),
            staff("staff_b", "Sam Ortiz", "22.00"),
        ];
        let timesheets = [
            timesheet("ts1", "staff_a", "09:00", "13:00", TimesheetStatus::Approved), // 4.0 -> 80.00
            timesheet("ts2", "staff_b", "09:00", "14:00", TimesheetStatus::Approved), // 5.0 -> 110.00
        ];

        let summary = aggregate_week(week(), &timesheets, &roster, PayRateResolutionPolicy::Current);

        assert_eq!(summary.total_hours, dec("9.0"));
        assert_eq!(summary.total_pay, dec("190.00"));
    }

    #[test]
    fn test_policy_default_is_current() {
        assert_eq!(
            PayRateResolutionPolicy::default(),
            PayRateResolutionPolicy::Current
        );
    }
}
