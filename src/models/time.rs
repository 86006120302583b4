//! Clock time handling for exam schedules.
//!
//! Exam times are naive local wall-clock values with minute precision,
//! carried on the wire and in snapshots as `"HH:MM"` strings. Internally a
//! [`ClockTime`] is the minute offset since midnight, which makes interval
//! comparison and `(date, start_time)` sorting plain integer ordering.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a `"HH:MM"` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}")]
pub struct TimeFormatError {
    /// The rejected input string.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl TimeFormatError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A wall-clock time with minute precision, stored as minutes since midnight.
///
/// Ordering follows the minute offset, so `09:00 < 11:30` holds directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Parse a 24-hour `"HH:MM"` string.
    ///
    /// Accepts exactly two colon-separated integer fields with hour in
    /// [0,24) and minute in [0,60).
    pub fn parse(s: &str) -> Result<Self, TimeFormatError> {
        let mut parts = s.split(':');
        let (hour_str, minute_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None) => (h, m),
            _ => return Err(TimeFormatError::new(s, "expected HH:MM")),
        };

        let hour: u16 = hour_str
            .trim()
            .parse()
            .map_err(|_| TimeFormatError::new(s, "hour is not a number"))?;
        let minute: u16 = minute_str
            .trim()
            .parse()
            .map_err(|_| TimeFormatError::new(s, "minute is not a number"))?;

        Self::from_parts(hour, minute).ok_or_else(|| {
            TimeFormatError::new(s, "hour must be in 0..24 and minute in 0..60")
        })
    }

    /// Build a time from an hour/minute pair; `None` if out of range.
    pub fn from_parts(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Half-open interval intersection: `[s1, e1)` overlaps `[s2, e2)`.
///
/// Back-to-back intervals (one ending exactly when the other starts) do not
/// overlap, so an exam ending at 10:00 never collides with one starting at
/// 10:00.
pub fn overlaps(s1: ClockTime, e1: ClockTime, s2: ClockTime, e2: ClockTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Whether two exam dates fall on the same calendar day.
///
/// Dates are day-granular [`NaiveDate`]s, so this is plain equality; the
/// helper exists to keep conflict predicates reading in schedule terms.
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(t("00:00").minutes(), 0);
        assert_eq!(t("09:30").minutes(), 570);
        assert_eq!(t("23:59").minutes(), 1439);
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        for input in ["", "9", "09", "09:30:00", "nine:thirty", "09-30", ":"] {
            assert!(ClockTime::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("99:99").is_err());
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(t("09:05").to_string(), "09:05");
        assert_eq!(t("23:59").to_string(), "23:59");
    }

    #[test]
    fn serde_round_trips_as_string() {
        let json = serde_json::to_string(&t("14:45")).unwrap();
        assert_eq!(json, "\"14:45\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("14:45"));
    }

    #[test]
    fn overlap_is_half_open() {
        // [09:00, 11:00) vs [10:00, 12:00): overlap
        assert!(overlaps(t("09:00"), t("11:00"), t("10:00"), t("12:00")));
        // back-to-back: no overlap in either order
        assert!(!overlaps(t("09:00"), t("11:00"), t("11:00"), t("12:00")));
        assert!(!overlaps(t("11:00"), t("12:00"), t("09:00"), t("11:00")));
        // containment
        assert!(overlaps(t("09:00"), t("12:00"), t("10:00"), t("11:00")));
        // disjoint
        assert!(!overlaps(t("09:00"), t("10:00"), t("13:00"), t("14:00")));
    }

    #[test]
    fn ordering_follows_minutes() {
        assert!(t("08:59") < t("09:00"));
        assert!(t("09:00") < t("09:01"));
    }
}
