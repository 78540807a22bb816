use std::{collections::BTreeMap, io::Write};

use serde::Serialize;

use crate::{
    shared::time::DayOfWeek,
    summary::{self, RideStats},
    trip::MemberCasual,
};

#[derive(Serialize)]
struct MemberRow {
    member_casual: String,
    rides: usize,
    mean_ride_length: String,
    mean_secs: f64,
    median_secs: f64,
    min_secs: i64,
    max_secs: i64,
}

#[derive(Serialize)]
struct WeekdayRow {
    member_casual: String,
    day_of_week: u8,
    day_name: &'static str,
    rides: usize,
    mean_secs: f64,
}

#[derive(Serialize)]
struct HourRow {
    member_casual: String,
    hour: u32,
    rides: usize,
    mean_secs: f64,
}

pub fn write_member_csv<W: Write>(
    writer: W,
    table: &BTreeMap<MemberCasual, RideStats>,
) -> Result<(), summary::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (member, stats) in table {
        wtr.serialize(MemberRow {
            member_casual: member.to_string(),
            rides: stats.count,
            mean_ride_length: stats.mean_length().to_hms_string(),
            mean_secs: stats.mean_secs,
            median_secs: stats.median_secs,
            min_secs: stats.min_secs,
            max_secs: stats.max_secs,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_weekday_csv<W: Write>(
    writer: W,
    table: &BTreeMap<(MemberCasual, DayOfWeek), RideStats>,
) -> Result<(), summary::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for ((member, day), stats) in table {
        wtr.serialize(WeekdayRow {
            member_casual: member.to_string(),
            day_of_week: day.as_number(),
            day_name: day.name(),
            rides: stats.count,
            mean_secs: stats.mean_secs,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_hour_csv<W: Write>(
    writer: W,
    table: &BTreeMap<(MemberCasual, u32), RideStats>,
) -> Result<(), summary::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for ((member, hour), stats) in table {
        wtr.serialize(HourRow {
            member_casual: member.to_string(),
            hour: *hour,
            rides: stats.count,
            mean_secs: stats.mean_secs,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
