use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike};

mod category;
pub use category::*;

use crate::{
    shared::time::{DayOfWeek, RideLength},
    source::models::{RawTripV1, RawTripV2},
};

/// One trip in the unified layout, whichever extract it came from.
///
/// Timestamps are kept as the source text. [`Derived`] is filled in during
/// enrichment and stays `None` when either timestamp does not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalTrip {
    pub ride_id: Arc<str>,
    pub rideable_type: RideableType,
    pub started_at: Arc<str>,
    pub ended_at: Arc<str>,
    pub start_station_name: Option<Arc<str>>,
    pub start_station_id: Option<Arc<str>>,
    pub end_station_name: Option<Arc<str>>,
    pub end_station_id: Option<Arc<str>>,
    pub member_casual: MemberCasual,
    pub derived: Option<Derived>,
}

/// Values computed from a successfully parsed start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub started: NaiveDateTime,
    pub ended: NaiveDateTime,
    /// Can be zero or negative, see [`RideLength`].
    pub ride_length: RideLength,
    pub day_of_week: DayOfWeek,
    pub hour_of_day: u32,
}

impl Derived {
    pub fn from_timestamps(started: NaiveDateTime, ended: NaiveDateTime) -> Self {
        Self {
            started,
            ended,
            ride_length: RideLength::between(started, ended),
            day_of_week: DayOfWeek::of(&started),
            hour_of_day: started.hour(),
        }
    }
}

impl CanonicalTrip {
    pub fn ride_length(&self) -> Option<RideLength> {
        self.derived.map(|derived| derived.ride_length)
    }

    pub fn ride_length_secs(&self) -> Option<i64> {
        self.ride_length().map(|length| length.as_seconds())
    }

    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        self.derived.map(|derived| derived.day_of_week)
    }

    pub fn hour_of_day(&self) -> Option<u32> {
        self.derived.map(|derived| derived.hour_of_day)
    }

    pub(crate) fn with_derived(self, derived: Option<Derived>) -> Self {
        Self { derived, ..self }
    }
}

impl From<RawTripV1> for CanonicalTrip {
    fn from(value: RawTripV1) -> Self {
        Self {
            ride_id: value.trip_id.to_string().into(),
            rideable_type: RideableType::LEGACY,
            started_at: value.start_time.into(),
            ended_at: value.end_time.into(),
            start_station_name: value.from_station_name.map(|val| val.into()),
            start_station_id: value.from_station_id.map(|val| val.into()),
            end_station_name: value.to_station_name.map(|val| val.into()),
            end_station_id: value.to_station_id.map(|val| val.into()),
            member_casual: MemberCasual::from_legacy_label(&value.usertype),
            derived: None,
        }
    }
}

impl From<RawTripV2> for CanonicalTrip {
    fn from(value: RawTripV2) -> Self {
        Self {
            ride_id: value.ride_id.into(),
            rideable_type: RideableType::from_label(&value.rideable_type),
            started_at: value.started_at.into(),
            ended_at: value.ended_at.into(),
            start_station_name: value.start_station_name.map(|val| val.into()),
            start_station_id: value.start_station_id.map(|val| val.into()),
            end_station_name: value.end_station_name.map(|val| val.into()),
            end_station_id: value.end_station_id.map(|val| val.into()),
            member_casual: MemberCasual::from_label(&value.member_casual),
            derived: None,
        }
    }
}
