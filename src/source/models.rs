use serde::{Deserialize, Serialize};

// Real extracts carry more columns than these (bikeid, tripduration, gender,
// coordinates...). They are skipped, so no `deny_unknown_fields` here.

/// Row of the legacy extract layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawTripV1 {
    pub trip_id: u64,
    pub start_time: String,
    pub end_time: String,
    pub from_station_id: Option<String>,
    pub from_station_name: Option<String>,
    pub to_station_id: Option<String>,
    pub to_station_name: Option<String>,
    pub usertype: String,
}

/// Row of the current extract layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawTripV2 {
    pub ride_id: String,
    pub rideable_type: String,
    pub started_at: String,
    pub ended_at: String,
    pub start_station_name: Option<String>,
    pub start_station_id: Option<String>,
    pub end_station_name: Option<String>,
    pub end_station_id: Option<String>,
    pub member_casual: String,
}
