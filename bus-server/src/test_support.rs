//! Builders and fixtures shared by unit tests.
//!
//! The fixtures are a slice of the Kent Ridge campus network: three internal
//! shuttle services (one linear, one single loop, one figure-of-eight) over
//! two dozen stops.

use crate::domain::{
    Coordinates, Direction, RouteStopPair, ServiceNo, Station, StationCode, StopCode, StopRecord,
    StopSequenceEntry,
};
use crate::network::InMemoryNetwork;

const DEFAULT_LOCATION: (f64, f64) = (1.2966, 103.7764);

/// A route row for service "TEST" direction 1 at a fixed location.
pub fn pair(seq: u32, code: &str, description: &str, km: f64) -> RouteStopPair {
    pair_at(seq, code, description, km, DEFAULT_LOCATION)
}

/// A route row for service "TEST" direction 1 at `(lat, lon)`.
pub fn pair_at(
    seq: u32,
    code: &str,
    description: &str,
    km: f64,
    (lat, lon): (f64, f64),
) -> RouteStopPair {
    let record = stop(code, description, (lat, lon));
    service_pair("TEST", Direction::Outbound, seq, &record, km)
}

pub fn stop(code: &str, description: &str, (lat, lon): (f64, f64)) -> StopRecord {
    StopRecord::new(
        StopCode::new(code).unwrap(),
        "Kent Ridge Crescent",
        description,
        Coordinates::new(lat, lon),
    )
}

pub fn service_pair(
    service: &str,
    direction: Direction,
    seq: u32,
    record: &StopRecord,
    km: f64,
) -> RouteStopPair {
    let entry = StopSequenceEntry::new(
        ServiceNo::new(service).unwrap(),
        direction,
        seq,
        record.code.clone(),
        km,
    )
    .unwrap();
    RouteStopPair::new(entry, record.clone()).unwrap()
}

pub fn codes(route: &[RouteStopPair]) -> Vec<&str> {
    route.iter().map(|p| p.code().as_str()).collect()
}

pub fn sequences(route: &[RouteStopPair]) -> Vec<u32> {
    route.iter().map(|p| p.stop_sequence()).collect()
}

pub fn distances(route: &[RouteStopPair]) -> Vec<f64> {
    route.iter().map(|p| p.distance_km()).collect()
}

/// `(code, sequence, km)` triples, for comparing against expected routes.
pub fn layout(route: &[RouteStopPair]) -> Vec<(&str, u32, f64)> {
    route
        .iter()
        .map(|p| (p.code().as_str(), p.stop_sequence(), p.distance_km()))
        .collect()
}

const CAMPUS_STOPS: &[(&str, &str, f64, f64)] = &[
    ("18331", "Kent Ridge Stn Exit A/NUH", 1.2948117103061263, 103.78437918054274),
    ("18339", "Opp Kent Ridge Stn Exit A", 1.2950030435540145, 103.78460883908544),
    ("18301", "Lim Seng Tjoe Bldg (LT27)", 1.297360034928917, 103.78095045621575),
    ("18309", "Blk S17", 1.2975513679805142, 103.78072079767756),
    ("18311", "Blk S12", 1.2971385871545937, 103.7787816322459),
    ("18319", "Opp University Hall", 1.2975365128314262, 103.77812636874044),
    ("18321", "Opp University Health Ctr", 1.298797868761511, 103.77561524481003),
    ("18329", "University Health Ctr", 1.298934626270826, 103.77610877124941),
    ("16169", "NUS Raffles Hall", 1.300990117538751, 103.77271004122734),
    ("16161", "NUS Museums", 1.3010758029196525, 103.77368891080535),
    ("16189", "Information Technology", 1.2972176268958733, 103.7726877061283),
    ("16181", "Ctrl Lib", 1.2965671166736066, 103.77254247576647),
    ("16179", "Opp Yusof Ishak Hse", 1.2989822232795727, 103.77417544854725),
    ("16171", "Yusof Ishak Hse", 1.2989025862071986, 103.77438028222298),
    ("1000109", "University Town", 1.3035640377827036, 103.77441333021167),
    ("1000119", "Ventus", 1.2953861326858667, 103.77053721002584),
    ("1000111", "LT13", 1.294752883527641, 103.7705872839438),
    ("1000129", "Opp NUSS", 1.2932864089899943, 103.77243577306346),
    ("1000121", "AS 5", 1.2934849444163823, 103.77192263374366),
    ("1000139", "Opp HSSML", 1.2929864002314433, 103.77510132358289),
    ("1000131", "Biz 2", 1.293431694682836, 103.77511296942437),
    ("1000159", "PGP Foyer", 1.2909442886549687, 103.78110146793922),
    ("1000151", "PGP", 1.2918202990643677, 103.78042627545256),
    ("1000169", "COM 3", 1.2949181152540041, 103.77493256351714),
];

/// Every campus stop record.
pub fn campus_stops() -> Vec<StopRecord> {
    CAMPUS_STOPS
        .iter()
        .map(|&(code, description, lat, lon)| stop(code, description, (lat, lon)))
        .collect()
}

pub fn campus_stop(code: &str) -> StopRecord {
    campus_stops()
        .into_iter()
        .find(|s| s.code.as_str() == code)
        .unwrap_or_else(|| panic!("no campus stop {code}"))
}

fn campus_route(service: &str, stops: &[(&str, f64)]) -> Vec<RouteStopPair> {
    stops
        .iter()
        .enumerate()
        .map(|(seq, &(code, km))| {
            service_pair(
                service,
                Direction::Outbound,
                seq as u32,
                &campus_stop(code),
                km,
            )
        })
        .collect()
}

/// Kent Ridge MRT to University Town, one way.
pub fn route_1004a() -> Vec<RouteStopPair> {
    campus_route(
        "1004A",
        &[
            ("18331", 0.0),
            ("18301", 0.5),
            ("18311", 0.8),
            ("18321", 1.2),
            ("1000109", 1.9),
        ],
    )
}

/// PGP round the campus and back to PGP Foyer.
pub fn route_1011() -> Vec<RouteStopPair> {
    campus_route(
        "1011",
        &[
            ("1000151", 0.0),
            ("18331", 0.8),
            ("18301", 1.4),
            ("18311", 1.6),
            ("18321", 2.0),
            ("16171", 2.2),
            ("16181", 2.6),
            ("16181", 3.1),
            ("16181", 3.4),
            ("16161", 3.9),
            ("18329", 4.3),
            ("18319", 4.6),
            ("18309", 4.9),
            ("18339", 5.5),
            ("1000159", 6.2),
        ],
    )
}

/// COM 3 out to University Town, back through COM 3, round the west of
/// campus, and home to COM 3.
pub fn route_1004() -> Vec<RouteStopPair> {
    campus_route(
        "1004",
        &[
            ("1000169", 0.0),
            ("1000151", 0.8),
            ("18331", 1.6),
            ("18301", 2.2),
            ("18311", 2.4),
            ("18321", 2.8),
            ("16161", 3.3),
            ("1000109", 3.7),
            ("18329", 4.7),
            ("18319", 5.0),
            ("18309", 5.3),
            ("18339", 5.9),
            ("1000159", 6.6),
            ("1000169", 7.5),
            ("1000139", 7.8),
            ("1000129", 8.1),
            ("1000119", 8.5),
            ("16189", 8.8),
            ("16179", 9.1),
            ("16161", 9.5),
            ("1000109", 9.9),
            ("16171", 10.7),
            ("16181", 11.1),
            ("1000111", 11.5),
            ("1000121", 11.7),
            ("1000131", 12.3),
            ("1000169", 12.5),
        ],
    )
}

/// The rail station next to the campus.
pub fn kent_ridge_station() -> Station {
    Station {
        code: StationCode::new("CC24").unwrap(),
        kind: "MRT".to_string(),
        name: "Kent Ridge".to_string(),
        location: Coordinates::new(1.2935, 103.7846),
    }
}

/// All three campus services over the campus stops, and the station.
pub fn campus_network() -> InMemoryNetwork {
    let entries = [route_1004a(), route_1011(), route_1004()]
        .into_iter()
        .flatten()
        .map(|p| p.entry)
        .collect();
    InMemoryNetwork::new(campus_stops(), entries).with_stations([kent_ridge_station()])
}
