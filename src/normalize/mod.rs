//! Turns rows from both extract layouts into [`CanonicalTrip`]s.
//!
//! Nothing in here fails. A label that is not recognised becomes
//! [`MemberCasual::Unknown`](crate::trip::MemberCasual::Unknown), a timestamp
//! that does not parse leaves [`CanonicalTrip::derived`] empty, and the row is
//! kept either way. Ride lengths of zero or below are kept as well.

use std::time::Instant;

use tracing::{debug, warn};

mod config;
pub use config::*;

use crate::{
    shared::time::parse_timestamp,
    source::models::{RawTripV1, RawTripV2},
    trip::{CanonicalTrip, Derived},
};

#[derive(Default)]
pub struct TripNormalizer {
    config: Config,
}

impl TripNormalizer {
    pub fn new(config: self::Config) -> Self {
        Self { config }
    }

    /// Renames legacy columns, maps `usertype` onto member/casual and
    /// backfills the legacy rideable type. One output per input row.
    pub fn normalize_legacy(&self, rows: Vec<RawTripV1>) -> Vec<CanonicalTrip> {
        debug!("Normalizing {} legacy trips...", rows.len());
        rows.into_iter().map(CanonicalTrip::from).collect()
    }

    /// Reorders current rows into the canonical layout without touching
    /// their values.
    pub fn normalize_current(&self, rows: Vec<RawTripV2>) -> Vec<CanonicalTrip> {
        debug!("Normalizing {} current trips...", rows.len());
        rows.into_iter().map(CanonicalTrip::from).collect()
    }

    /// Appends `b` after `a` and derives ride length, weekday and hour for
    /// every trip whose timestamps both parse.
    pub fn merge_and_enrich(
        &self,
        a: Vec<CanonicalTrip>,
        b: Vec<CanonicalTrip>,
    ) -> Vec<CanonicalTrip> {
        debug!("Enriching {} trips...", a.len() + b.len());
        let now = Instant::now();
        let mut unparsed = 0usize;
        let trips: Vec<CanonicalTrip> = a
            .into_iter()
            .chain(b)
            .map(|trip| {
                let derived = self.derive(&trip);
                if derived.is_none() {
                    unparsed += 1;
                }
                trip.with_derived(derived)
            })
            .collect();
        if unparsed > 0 {
            warn!("{unparsed} trips have timestamps that could not be parsed");
        }
        debug!("Enriching trips took {:?}", now.elapsed());
        trips
    }

    fn derive(&self, trip: &CanonicalTrip) -> Option<Derived> {
        let format = self.config.timestamp_format.as_str();
        let started = parse_timestamp(&trip.started_at, format)?;
        let ended = parse_timestamp(&trip.ended_at, format)?;
        Some(Derived::from_timestamps(started, ended))
    }
}
