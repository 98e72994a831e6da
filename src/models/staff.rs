//! Staff member model and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role a user holds within the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Regular staff: submits availability and timesheets.
    Staff,
    /// Administrator: approves shifts and timesheets, runs payroll.
    Admin,
}

/// A staff member referenced by availability, shifts and timesheets.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{StaffMember, StaffRole};
/// use rust_decimal::Decimal;
///
/// let staff = StaffMember {
///     id: "staff_001".to_string(),
///     name: "Dana Wells".to_string(),
///     role: StaffRole::Staff,
///     hourly_rate: Decimal::new(2000, 2), // 20.00
///     is_active: true,
/// };
/// assert!(!staff.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The role held by this user.
    pub role: StaffRole,
    /// Hourly pay rate (non-negative).
    pub hourly_rate: Decimal,
    /// Whether the staff member is currently active.
    pub is_active: bool,
}

impl StaffMember {
    /// Returns true if this member holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }
}
