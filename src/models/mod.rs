//! Domain models for the roster engine.
//!
//! This module contains the data types shared by validation, payroll and the
//! HTTP API: wall-clock times, weeks, staff members, availability, shifts,
//! timesheets and roster audit entries.

mod audit;
mod availability;
mod shift;
mod staff;
mod time;
mod timesheet;
mod week;

pub use audit::{RosterAction, RosterAuditLog};
pub use availability::{Availability, AvailabilityStatus};
pub use shift::{Shift, ShiftStatus};
pub use staff::{StaffMember, StaffRole};
pub use time::{TimeOfDay, TimeRange, duration_hours};
pub use timesheet::{Timesheet, TimesheetStatus};
pub use week::RosterWeek;
