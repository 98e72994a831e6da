//! Roster audit log model.
//!
//! Admin edits and removals of rostered shifts are recorded as audit entries
//! so the roster history stays reconstructable. Shift creation is not logged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shift::Shift;

/// The admin action recorded by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterAction {
    /// A rostered shift's times were changed.
    Edit,
    /// A shift was removed from the roster.
    Remove,
}

/// A record of one admin action against the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterAuditLog {
    /// The admin who performed the action.
    pub admin_id: String,
    /// The shift the action applied to.
    pub shift_id: String,
    /// The staff member the shift belongs to.
    pub staff_id: String,
    /// The action performed.
    pub action: RosterAction,
    /// The shift as it was before the action, if applicable.
    #[serde(default)]
    pub previous: Option<Shift>,
    /// The shift as it is after the action, if applicable.
    #[serde(default)]
    pub new: Option<Shift>,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

impl RosterAuditLog {
    /// Records an edit, keeping both the previous and updated shift.
    pub fn edit(admin_id: String, previous: Shift, new: Shift, at: DateTime<Utc>) -> Self {
        Self {
            admin_id,
            shift_id: new.id.clone(),
            staff_id: new.staff_id.clone(),
            action: RosterAction::Edit,
            previous: Some(previous),
            new: Some(new),
            timestamp: at,
        }
    }

    /// Records a removal, keeping the shift as it was.
    pub fn remove(admin_id: String, shift: Shift, at: DateTime<Utc>) -> Self {
        Self {
            admin_id,
            shift_id: shift.id.clone(),
            staff_id: shift.staff_id.clone(),
            action: RosterAction::Remove,
            previous: Some(shift),
            new: None,
            timestamp: at,
        }
    }
}
