//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during shift validation and
//! configuration loading.

use thiserror::Error;

use crate::models::TimeOfDay;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/shop.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shop.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A time string did not match the zero-padded 24-hour "HH:MM" form.
    #[error("Invalid time '{input}': {message}")]
    TimeFormat {
        /// The input string that failed to parse.
        input: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A proposed shift falls outside the shop's configured open/close window.
    #[error("Shift {start}-{end} is outside operating hours {open}-{close}")]
    OutsideOperatingHours {
        /// The proposed shift start.
        start: TimeOfDay,
        /// The proposed shift end.
        end: TimeOfDay,
        /// The shop opening time.
        open: TimeOfDay,
        /// The shop closing time.
        close: TimeOfDay,
    },

    /// A start time was not strictly before its end time.
    #[error("Start time {start} must be before end time {end}")]
    StartNotBeforeEnd {
        /// The offending start time.
        start: TimeOfDay,
        /// The offending end time.
        end: TimeOfDay,
    },

    /// A proposed shift is not contained in any submitted availability range.
    #[error("Shift {start}-{end} is not within the staff member's availability")]
    OutsideAvailability {
        /// The proposed shift start.
        start: TimeOfDay,
        /// The proposed shift end.
        end: TimeOfDay,
    },

    /// A proposed shift intersects an existing approved shift for the same
    /// staff member on the same day.
    #[error("Shift {start}-{end} overlaps existing shift {existing_start}-{existing_end}")]
    ShiftOverlap {
        /// The proposed shift start.
        start: TimeOfDay,
        /// The proposed shift end.
        end: TimeOfDay,
        /// The start of the conflicting shift.
        existing_start: TimeOfDay,
        /// The end of the conflicting shift.
        existing_end: TimeOfDay,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Loaded configuration was internally inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
