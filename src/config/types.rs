//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::{TimeOfDay, TimeRange};

/// Identifying information about the shop.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopInfo {
    /// The shop's display name.
    pub name: String,
    /// The IANA timezone all wall-clock times are interpreted in.
    pub timezone: String,
}

/// The daily open/close window, applied uniformly to every day of the week.
///
/// Shifts must start at or after `open` and end at or before `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// The opening time.
    pub open: TimeOfDay,
    /// The closing time.
    pub close: TimeOfDay,
}

impl OperatingHours {
    /// Returns the window as a time range.
    pub fn as_range(&self) -> TimeRange {
        TimeRange::new(self.open, self.close)
    }
}

/// The complete shop configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Shop metadata.
    info: ShopInfo,
    /// The daily operating window.
    hours: OperatingHours,
}

impl ShopConfig {
    /// Creates a ShopConfig from its component parts.
    ///
    /// Fails with `InvalidConfig` unless the operating window is non-empty,
    /// i.e. the opening time is strictly before the closing time.
    pub fn new(info: ShopInfo, hours: OperatingHours) -> RosterResult<Self> {
        if !hours.open.is_before(hours.close) {
            return Err(RosterError::InvalidConfig {
                message: format!(
                    "opening time {} must be before closing time {}",
                    hours.open, hours.close
                ),
            });
        }
        Ok(Self { info, hours })
    }

    /// Returns the shop metadata.
    pub fn info(&self) -> &ShopInfo {
        &self.info
    }

    /// Returns the daily operating window.
    pub fn operating_hours(&self) -> &OperatingHours {
        &self.hours
    }
}
