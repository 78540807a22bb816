use std::fmt;

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Timestamp layout used by both extract generations.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Signed ride duration in whole seconds.
///
/// Source extracts contain trips whose end precedes their start (clock skew
/// or bad rows), so the value can be zero or negative. Nothing here filters
/// those out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RideLength(i64);

impl From<i64> for RideLength {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl RideLength {
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs)
    }

    pub fn between(started_at: NaiveDateTime, ended_at: NaiveDateTime) -> Self {
        Self((ended_at - started_at).num_seconds())
    }

    pub const fn as_seconds(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Hours are not wrapped at 24, negative lengths get a leading `-`.
    pub fn to_hms_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let secs = self.0.unsigned_abs();
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        let s = secs % 60;
        format!("{}{:02}:{:02}:{:02}", sign, h, m, s)
    }
}

impl fmt::Display for RideLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hms_string())
    }
}

/// Day of the week numbered 1..=7 with Sunday as day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfWeek(u8);

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        Self(value.number_from_sunday() as u8)
    }
}

impl DayOfWeek {
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        timestamp.weekday().into()
    }

    pub const fn as_number(&self) -> u8 {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        match self.0 {
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.weekday() {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub fn parse_timestamp(value: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), format).ok()
}

#[test]
fn hms_zero() {
    assert_eq!(RideLength::from_seconds(0).to_hms_string(), "00:00:00");
}

#[test]
fn hms_minutes() {
    assert_eq!(RideLength::from_seconds(125).to_hms_string(), "00:02:05");
}

#[test]
fn hms_past_a_day() {
    assert_eq!(RideLength::from_seconds(90_061).to_hms_string(), "25:01:01");
}

#[test]
fn hms_negative() {
    assert_eq!(RideLength::from_seconds(-125).to_hms_string(), "-00:02:05");
}

#[test]
fn weekday_round_trips_through_number() {
    for day in [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ] {
        assert_eq!(DayOfWeek::from(day).weekday(), day);
    }
}

#[test]
fn invalid_timestamp() {
    assert!(parse_timestamp("not-a-date", TIMESTAMP_FORMAT).is_none());
    assert!(parse_timestamp("2019-01-01", TIMESTAMP_FORMAT).is_none());
}
