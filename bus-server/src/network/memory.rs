//! A whole bus network held in memory.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::domain::{
    Direction, RouteStopPair, ServiceNo, Station, StationCode, StopCode, StopRecord,
    StopSequenceEntry,
};

use super::RouteSource;
use super::dataset::Dataset;

type RouteKey = (ServiceNo, Direction);

/// Stops and joined routes, indexed for lookup by service and by stop.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetwork {
    stops: HashMap<StopCode, StopRecord>,
    routes: HashMap<RouteKey, Vec<RouteStopPair>>,
    at_stop: HashMap<StopCode, Vec<StopSequenceEntry>>,
    stations: HashMap<StationCode, Station>,
}

impl InMemoryNetwork {
    /// Build a network from validated stops and route rows.
    ///
    /// Rows naming a stop that is not in `stops` are dropped with a warning.
    /// Each route is ordered by stop sequence.
    pub fn new(stops: Vec<StopRecord>, entries: Vec<StopSequenceEntry>) -> Self {
        let stops: HashMap<StopCode, StopRecord> =
            stops.into_iter().map(|s| (s.code.clone(), s)).collect();

        let mut routes: HashMap<RouteKey, Vec<RouteStopPair>> = HashMap::new();
        let mut at_stop: HashMap<StopCode, Vec<StopSequenceEntry>> = HashMap::new();
        let mut orphans = 0usize;

        for entry in entries {
            let Some(stop) = stops.get(&entry.stop_code) else {
                warn!(
                    service = %entry.service_no,
                    direction = %entry.direction,
                    sequence = entry.stop_sequence,
                    stop = %entry.stop_code,
                    "route row names an unknown stop; skipping"
                );
                orphans += 1;
                continue;
            };
            at_stop
                .entry(entry.stop_code.clone())
                .or_default()
                .push(entry.clone());
            let key = (entry.service_no.clone(), entry.direction);
            routes.entry(key).or_default().push(RouteStopPair {
                entry,
                stop: stop.clone(),
            });
        }

        for route in routes.values_mut() {
            route.sort_by_key(|p| p.stop_sequence());
        }

        info!(
            stops = stops.len(),
            routes = routes.len(),
            skipped_rows = orphans,
            "built in-memory bus network"
        );

        Self {
            stops,
            routes,
            at_stop,
            stations: HashMap::new(),
        }
    }

    /// Add rail stations that can be looked up as transfer targets.
    pub fn with_stations(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.stations
            .extend(stations.into_iter().map(|s| (s.code.clone(), s)));
        self
    }

    /// Validate and index the raw rows of a dataset.
    ///
    /// Rows that fail validation are skipped with a warning rather than
    /// failing the whole load.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let stops = dataset
            .stops
            .iter()
            .filter_map(|row| match row.to_record() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(code = %row.bus_stop_code, error = %e, "invalid stop row; skipping");
                    None
                }
            })
            .collect();

        let entries = dataset
            .routes
            .iter()
            .filter_map(|row| match row.to_entry() {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        service = %row.service_no,
                        sequence = row.stop_sequence,
                        error = %e,
                        "invalid route row; skipping"
                    );
                    None
                }
            })
            .collect();

        let stations: Vec<Station> = dataset
            .stations
            .iter()
            .filter_map(|row| match row.to_station() {
                Ok(station) => Some(station),
                Err(e) => {
                    warn!(code = %row.code, error = %e, "invalid station row; skipping");
                    None
                }
            })
            .collect();

        Self::new(stops, entries).with_stations(stations)
    }

    /// Every `(service, direction)` with at least one row, sorted.
    pub fn services(&self) -> Vec<(ServiceNo, Direction)> {
        let mut keys: Vec<_> = self.routes.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl RouteSource for InMemoryNetwork {
    fn fetch_route(&self, service: &ServiceNo, direction: Direction) -> Vec<RouteStopPair> {
        self.routes
            .get(&(service.clone(), direction))
            .cloned()
            .unwrap_or_default()
    }

    fn fetch_stop(&self, code: &StopCode) -> Option<StopRecord> {
        self.stops.get(code).cloned()
    }

    fn all_stops(&self) -> Vec<StopRecord> {
        let mut stops: Vec<_> = self.stops.values().cloned().collect();
        stops.sort_by(|a, b| a.code.cmp(&b.code));
        stops
    }

    fn routes_at_stop(&self, code: &StopCode) -> Vec<StopSequenceEntry> {
        self.at_stop.get(code).cloned().unwrap_or_default()
    }

    fn fetch_station(&self, code: &StationCode) -> Option<Station> {
        self.stations.get(code).cloned()
    }
}
