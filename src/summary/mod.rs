//! Grouped ride-length statistics comparing members and casual riders.
//!
//! Only trips with a known rider segment and derived timestamps are grouped.
//! [`Overview`] reports how many were left out.

use std::{collections::BTreeMap, io, time::Instant};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

mod writer;
pub use writer::*;

use crate::{
    shared::time::{DayOfWeek, RideLength},
    trip::{CanonicalTrip, Derived, MemberCasual},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideStats {
    pub count: usize,
    pub mean_secs: f64,
    pub median_secs: f64,
    pub min_secs: i64,
    pub max_secs: i64,
}

impl RideStats {
    pub fn from_lengths(mut lengths: Vec<i64>) -> Option<Self> {
        if lengths.is_empty() {
            return None;
        }
        lengths.sort_unstable();
        let count = lengths.len();
        let total: i64 = lengths.iter().sum();
        let mid = count / 2;
        let median_secs = if count % 2 == 0 {
            (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
        } else {
            lengths[mid] as f64
        };
        Some(Self {
            count,
            mean_secs: total as f64 / count as f64,
            median_secs,
            min_secs: lengths[0],
            max_secs: lengths[count - 1],
        })
    }

    pub fn mean_length(&self) -> RideLength {
        RideLength::from_seconds(self.mean_secs.round() as i64)
    }
}

/// Counts describing how much of the trip table made it into the groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub enriched: usize,
    pub unknown_member: usize,
    pub non_positive_length: usize,
}

impl Overview {
    pub fn of(trips: &[CanonicalTrip]) -> Self {
        trips
            .par_iter()
            .map(|trip| Overview {
                total: 1,
                enriched: trip.derived.is_some() as usize,
                unknown_member: !trip.member_casual.is_known() as usize,
                non_positive_length: trip
                    .ride_length()
                    .map(|length| !length.is_positive() as usize)
                    .unwrap_or(0),
            })
            .reduce(Overview::default, |a, b| Overview {
                total: a.total + b.total,
                enriched: a.enriched + b.enriched,
                unknown_member: a.unknown_member + b.unknown_member,
                non_positive_length: a.non_positive_length + b.non_positive_length,
            })
    }
}

pub fn summarize_by_member(trips: &[CanonicalTrip]) -> BTreeMap<MemberCasual, RideStats> {
    group_lengths(trips, |member, _| member)
}

pub fn summarize_by_weekday(
    trips: &[CanonicalTrip],
) -> BTreeMap<(MemberCasual, DayOfWeek), RideStats> {
    group_lengths(trips, |member, derived| (member, derived.day_of_week))
}

pub fn summarize_by_hour(trips: &[CanonicalTrip]) -> BTreeMap<(MemberCasual, u32), RideStats> {
    group_lengths(trips, |member, derived| (member, derived.hour_of_day))
}

fn group_lengths<K, F>(trips: &[CanonicalTrip], key: F) -> BTreeMap<K, RideStats>
where
    K: Ord + Send,
    F: Fn(MemberCasual, &Derived) -> K + Send + Sync,
{
    let now = Instant::now();
    let groups = trips
        .par_iter()
        .filter_map(|trip| {
            let derived = trip.derived.as_ref()?;
            if !trip.member_casual.is_known() {
                return None;
            }
            Some((
                key(trip.member_casual, derived),
                derived.ride_length.as_seconds(),
            ))
        })
        .fold(BTreeMap::<K, Vec<i64>>::new, |mut acc, (group, secs)| {
            acc.entry(group).or_default().push(secs);
            acc
        })
        .reduce(BTreeMap::new, |mut a, b| {
            for (group, mut lengths) in b {
                a.entry(group).or_default().append(&mut lengths);
            }
            a
        });

    let stats: BTreeMap<K, RideStats> = groups
        .into_iter()
        .filter_map(|(group, lengths)| RideStats::from_lengths(lengths).map(|val| (group, val)))
        .collect();
    debug!("Grouping into {} buckets took {:?}", stats.len(), now.elapsed());
    stats
}
