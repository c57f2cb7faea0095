//! Stop-sequence rows and their join with stop records.
//!
//! A route is an ordered `Vec<RouteStopPair>` for one service and direction.
//! The topology engine never mutates a route; every transformation builds a
//! new vector from repositioned copies (see [`RouteStopPair::repositioned`]).

use super::error::DomainError;
use super::{Coordinates, Direction, ServiceNo, ServiceTimetable, StopCode, StopRecord};

/// Round a distance to the feed's 0.1 km resolution.
///
/// Shifting distances by other feed values accumulates floating point noise
/// (7.5 - 5.3 is not 2.2); rounding keeps rebased routes comparable with
/// published ones.
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// One row of a service's published route.
#[derive(Debug, Clone, PartialEq)]
pub struct StopSequenceEntry {
    pub service_no: ServiceNo,
    pub direction: Direction,
    /// Ordinal position along the route, 0 at the route's origin.
    pub stop_sequence: u32,
    pub stop_code: StopCode,
    /// Cumulative distance from the route's origin.
    pub distance_km: f64,
    pub timetable: ServiceTimetable,
}

impl StopSequenceEntry {
    /// Create an entry, rejecting negative or non-finite distances.
    pub fn new(
        service_no: ServiceNo,
        direction: Direction,
        stop_sequence: u32,
        stop_code: StopCode,
        distance_km: f64,
    ) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidDistance(distance_km));
        }
        Ok(Self {
            service_no,
            direction,
            stop_sequence,
            stop_code,
            distance_km,
            timetable: ServiceTimetable::default(),
        })
    }

    /// Attach first/last bus timings.
    pub fn with_timetable(mut self, timetable: ServiceTimetable) -> Self {
        self.timetable = timetable;
        self
    }

    /// Identity of this row within the whole network.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            service_no: self.service_no.clone(),
            direction: self.direction,
            stop_sequence: self.stop_sequence,
            stop_code: self.stop_code.clone(),
        }
    }
}

/// Identity of a route row: which service visits which stop at which ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub service_no: ServiceNo,
    pub direction: Direction,
    pub stop_sequence: u32,
    pub stop_code: StopCode,
}

/// A route row joined with the stop it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStopPair {
    pub entry: StopSequenceEntry,
    pub stop: StopRecord,
}

impl RouteStopPair {
    /// Join a row with its stop record.
    ///
    /// Fails if the record is for a different stop than the row names.
    pub fn new(entry: StopSequenceEntry, stop: StopRecord) -> Result<Self, DomainError> {
        if entry.stop_code != stop.code {
            return Err(DomainError::MismatchedStop {
                entry: entry.stop_code,
                stop: stop.code,
            });
        }
        Ok(Self { entry, stop })
    }

    pub fn stop_sequence(&self) -> u32 {
        self.entry.stop_sequence
    }

    pub fn distance_km(&self) -> f64 {
        self.entry.distance_km
    }

    pub fn code(&self) -> &StopCode {
        &self.stop.code
    }

    pub fn description(&self) -> &str {
        &self.stop.description
    }

    pub fn location(&self) -> Coordinates {
        self.stop.location
    }

    pub fn key(&self) -> EntryKey {
        self.entry.key()
    }

    /// A copy of this pair placed at a different ordinal and distance.
    ///
    /// The distance is rounded to 0.1 km and clamped at zero.
    pub fn repositioned(&self, stop_sequence: u32, distance_km: f64) -> Self {
        let mut moved = self.clone();
        moved.entry.stop_sequence = stop_sequence;
        moved.entry.distance_km = round_km(distance_km).max(0.0);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(seq: u32, code: &str, km: f64) -> StopSequenceEntry {
        StopSequenceEntry::new(
            ServiceNo::new("1011").unwrap(),
            Direction::Outbound,
            seq,
            StopCode::new(code).unwrap(),
            km,
        )
        .unwrap()
    }

    fn stop(code: &str) -> StopRecord {
        StopRecord::new(
            StopCode::new(code).unwrap(),
            "Prince George's Pk",
            "PGP",
            Coordinates::new(1.2918, 103.7804),
        )
    }

    #[test]
    fn round_km_to_one_decimal() {
        assert_eq!(round_km(7.5 - 5.3), 2.2);
        assert_eq!(round_km(12.5 + 0.8), 13.3);
        assert_eq!(round_km(0.04), 0.0);
    }

    #[test]
    fn entry_rejects_bad_distances() {
        let svc = ServiceNo::new("1011").unwrap();
        let code = StopCode::new("1000151").unwrap();
        assert!(
            StopSequenceEntry::new(svc.clone(), Direction::Outbound, 0, code.clone(), -0.1)
                .is_err()
        );
        assert!(
            StopSequenceEntry::new(svc, Direction::Outbound, 0, code, f64::NAN).is_err()
        );
    }

    #[test]
    fn pair_requires_matching_stop() {
        assert!(RouteStopPair::new(entry(0, "1000151", 0.0), stop("1000151")).is_ok());
        let err = RouteStopPair::new(entry(0, "1000151", 0.0), stop("1000159")).unwrap_err();
        assert!(matches!(err, DomainError::MismatchedStop { .. }));
    }

    #[test]
    fn repositioned_rounds_and_keeps_identity_fields() {
        let pair = RouteStopPair::new(entry(13, "1000151", 7.5), stop("1000151")).unwrap();
        let moved = pair.repositioned(3, 7.5 - 5.3);
        assert_eq!(moved.stop_sequence(), 3);
        assert_eq!(moved.distance_km(), 2.2);
        assert_eq!(moved.code(), pair.code());
        assert_eq!(moved.entry.service_no, pair.entry.service_no);
        // The original is untouched
        assert_eq!(pair.stop_sequence(), 13);
    }

    #[test]
    fn keys_distinguish_visits() {
        let a = entry(6, "16181", 2.6).key();
        let b = entry(7, "16181", 3.1).key();
        assert_ne!(a, b);
        assert_eq!(a, entry(6, "16181", 9.9).key());
    }
}
