//! Payroll aggregation for the roster engine.

mod weekly;

pub use weekly::{
    PayRateResolutionPolicy, StaffWeekTotals, WeeklyPayrollSummary, aggregate_week,
};
