//! Wall-clock time types.
//!
//! This module defines [`TimeOfDay`] and [`TimeRange`], the building blocks
//! for all shift, availability and timesheet intervals. Times carry no
//! timezone and are always interpreted in the shop's local time.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// A wall-clock time with hour and minute components.
///
/// Serialized as a zero-padded 24-hour `"HH:MM"` string, the form used on
/// every wire and configuration surface of the engine.
///
/// # Examples
///
/// ```
/// use roster_engine::models::TimeOfDay;
///
/// let open: TimeOfDay = "09:00".parse().unwrap();
/// assert_eq!(open.hour(), 9);
/// assert_eq!(open.minute(), 0);
/// assert_eq!(open.to_string(), "09:00");
///
/// // Not zero-padded, rejected:
/// assert!("9:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, rejecting out-of-range components.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(9, 30).is_ok());
    /// assert!(TimeOfDay::new(24, 0).is_err());
    /// assert!(TimeOfDay::new(12, 60).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> RosterResult<Self> {
        if hour > 23 {
            return Err(RosterError::TimeFormat {
                input: format!("{hour:02}:{minute:02}"),
                message: "hour must be between 00 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(RosterError::TimeFormat {
                input: format!("{hour:02}:{minute:02}"),
                message: "minute must be between 00 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour component (0-23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute component (0-59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the minute-of-day value (`hour * 60 + minute`).
    pub fn minute_of_day(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Returns true iff this time is strictly earlier than `other`.
    ///
    /// The comparison is strict: a time is never before itself. This single
    /// predicate drives both the ordering checks and the overlap test, so
    /// boundary-touching intervals compare as non-overlapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::TimeOfDay;
    ///
    /// let nine: TimeOfDay = "09:00".parse().unwrap();
    /// let five: TimeOfDay = "17:00".parse().unwrap();
    /// assert!(nine.is_before(five));
    /// assert!(!five.is_before(five));
    /// assert!(!five.is_before(nine));
    /// ```
    pub fn is_before(self, other: TimeOfDay) -> bool {
        self.minute_of_day() < other.minute_of_day()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |message: &str| RosterError::TimeFormat {
            input: s.to_string(),
            message: message.to_string(),
        };

        let mut fields = s.split(':');
        let (hour_field, minute_field) = match (fields.next(), fields.next(), fields.next()) {
            (Some(h), Some(m), None) => (h, m),
            _ => return Err(error("expected exactly two colon-separated fields")),
        };

        if hour_field.len() != 2 || !hour_field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(error("hour must be exactly two digits"));
        }
        if minute_field.len() != 2 || !minute_field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(error("minute must be exactly two digits"));
        }

        let hour: u8 = hour_field.parse().map_err(|_| error("hour is not a number"))?;
        let minute: u8 = minute_field
            .parse()
            .map_err(|_| error("minute is not a number"))?;

        if hour > 23 {
            return Err(error("hour must be between 00 and 23"));
        }
        if minute > 59 {
            return Err(error("minute must be between 00 and 59"));
        }

        Ok(Self { hour, minute })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Returns the duration from `start` to `end` in hours.
///
/// The result is negative when `end` precedes `start`: intervals do not wrap
/// around midnight. Callers that require a positive duration must validate
/// `start < end` beforehand; this function never fails.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{duration_hours, TimeOfDay};
/// use rust_decimal::Decimal;
///
/// let nine: TimeOfDay = "09:00".parse().unwrap();
/// let five: TimeOfDay = "17:00".parse().unwrap();
/// assert_eq!(duration_hours(nine, five), Decimal::new(80, 1)); // 8.0
/// assert_eq!(duration_hours(five, nine), Decimal::new(-80, 1)); // -8.0
/// ```
pub fn duration_hours(start: TimeOfDay, end: TimeOfDay) -> Decimal {
    let minutes = i64::from(end.minute_of_day()) - i64::from(start.minute_of_day());
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// An ordered pair of times bounding an interval within a single day.
///
/// A range is only usable for validation when `start` is strictly before
/// `end`; malformed ranges are accepted at the data level and rejected at
/// the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// The start of the interval.
    pub start: TimeOfDay,
    /// The end of the interval.
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Creates a range from start and end times.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns the duration of the range in hours, negative when the range
    /// is inverted.
    pub fn duration_hours(&self) -> Decimal {
        duration_hours(self.start, self.end)
    }

    /// Returns true iff `other` lies entirely within this range.
    ///
    /// Containment is non-strict: an interval that exactly matches the range
    /// boundaries is contained.
    pub fn contains(&self, other: &TimeRange) -> bool {
        !other.start.is_before(self.start) && !self.end.is_before(other.end)
    }

    /// Returns true iff this range intersects `other` for a non-zero span.
    ///
    /// Intervals that merely touch at a boundary do not overlap, since the
    /// underlying comparison is strict.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.is_before(other.end) && other.start.is_before(self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(time(start), time(end))
    }

    /// TM-001: zero-padded parse
    #[test]
    fn test_parse_zero_padded() {
        let t = time("09:00");
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 0);
    }

    /// TM-002: non-zero-padded hour rejected
    #[test]
    fn test_parse_rejects_unpadded_hour() {
        let err = "9:00".parse::<TimeOfDay>().unwrap_err();
        match err {
            RosterError::TimeFormat { input, .. } => assert_eq!(input, "9:00"),
            other => panic!("Expected TimeFormat, got {:?}", other),
        }
    }

    /// TM-003: hour out of range rejected
    #[test]
    fn test_parse_rejects_hour_24() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
    }

    /// TM-004: minute out of range rejected
    #[test]
    fn test_parse_rejects_minute_60() {
        assert!("12:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!("09".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_rejects_extra_field() {
        assert!("09:00:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
        assert!("0 :00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_rejects_three_digit_hour() {
        assert!("009:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_midnight_and_last_minute_parse() {
        assert_eq!(time("00:00").minute_of_day(), 0);
        assert_eq!(time("23:59").minute_of_day(), 23 * 60 + 59);
    }

    /// TM-005: is_before is strict
    #[test]
    fn test_is_before_strict() {
        assert!(time("09:00").is_before(time("17:00")));
        assert!(!time("17:00").is_before(time("17:00")));
        assert!(!time("17:00").is_before(time("09:00")));
    }

    #[test]
    fn test_is_before_minute_granularity() {
        assert!(time("09:00").is_before(time("09:01")));
        assert!(!time("09:01").is_before(time("09:00")));
    }

    /// TM-006: forward duration
    #[test]
    fn test_duration_hours_forward() {
        assert_eq!(
            duration_hours(time("09:00"), time("17:00")),
            Decimal::new(80, 1)
        );
    }

    /// TM-007: inverted duration is negative, no wraparound
    #[test]
    fn test_duration_hours_inverted_is_negative() {
        assert_eq!(
            duration_hours(time("17:00"), time("09:00")),
            Decimal::new(-80, 1)
        );
    }

    #[test]
    fn test_duration_hours_zero() {
        assert_eq!(duration_hours(time("12:00"), time("12:00")), Decimal::ZERO);
    }

    #[test]
    fn test_duration_hours_partial_hour() {
        // 09:00 to 09:45 = 0.75 hours
        assert_eq!(
            duration_hours(time("09:00"), time("09:45")),
            Decimal::new(75, 2)
        );
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(time("07:05").to_string(), "07:05");
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let t = time("09:30");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"09:30\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_deserialize_rejects_unpadded() {
        assert!(serde_json::from_str::<TimeOfDay>("\"9:00\"").is_err());
    }

    #[test]
    fn test_range_contains_inner() {
        assert!(range("09:00", "17:00").contains(&range("10:00", "14:00")));
    }

    #[test]
    fn test_range_contains_exact_boundaries() {
        assert!(range("09:00", "17:00").contains(&range("09:00", "17:00")));
    }

    #[test]
    fn test_range_does_not_contain_earlier_start() {
        assert!(!range("09:00", "17:00").contains(&range("08:00", "14:00")));
    }

    #[test]
    fn test_range_does_not_contain_later_end() {
        assert!(!range("09:00", "17:00").contains(&range("10:00", "18:00")));
    }

    #[test]
    fn test_ranges_overlap_partial() {
        assert!(range("12:00", "17:00").overlaps(&range("09:00", "13:00")));
    }

    #[test]
    fn test_ranges_overlap_containment() {
        assert!(range("09:30", "10:00").overlaps(&range("09:00", "13:00")));
    }

    #[test]
    fn test_boundary_touching_ranges_do_not_overlap() {
        assert!(!range("13:00", "17:00").overlaps(&range("09:00", "13:00")));
    }

    #[test]
    fn test_range_serde_round_trip() {
        let r = range("09:00", "17:30");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"start":"09:00","end":"17:30"}"#);
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    proptest! {
        /// For all ordered pairs the duration is non-negative; for all
        /// inverted pairs it is negative. Either way it is finite and the
        /// computation never panics.
        #[test]
        fn prop_duration_sign_matches_ordering(
            h1 in 0u8..24, m1 in 0u8..60,
            h2 in 0u8..24, m2 in 0u8..60,
        ) {
            let a = TimeOfDay::new(h1, m1).unwrap();
            let b = TimeOfDay::new(h2, m2).unwrap();
            let d = duration_hours(a, b);
            if a.is_before(b) {
                prop_assert!(d > Decimal::ZERO);
            } else if b.is_before(a) {
                prop_assert!(d < Decimal::ZERO);
            } else {
                prop_assert_eq!(d, Decimal::ZERO);
            }
        }

        /// Overlap is symmetric.
        #[test]
        fn prop_overlap_symmetric(
            s1 in 0u32..1440, e1 in 0u32..1440,
            s2 in 0u32..1440, e2 in 0u32..1440,
        ) {
            let t = |m: u32| TimeOfDay::new((m / 60) as u8, (m % 60) as u8).unwrap();
            let a = TimeRange::new(t(s1), t(e1));
            let b = TimeRange::new(t(s2), t(e2));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
