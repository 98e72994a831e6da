//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for validating proposed shifts
//! and aggregating weekly payroll totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ExistingShiftRequest, PayrollRequest, ShiftApprovalRequest, StaffMemberRequest,
    TimesheetRequest,
};
pub use response::{ApiError, ShiftApprovalResponse};
pub use state::AppState;
