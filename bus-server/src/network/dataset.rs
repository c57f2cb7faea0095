//! Bus network dataset files.
//!
//! The transit authority publishes stops and routes as paged JSON in an
//! OData envelope. A dataset directory holds one file per table with every
//! page's `value` rows concatenated:
//!
//! ```text
//! data/
//!   bus_stops.json      {"odata.metadata": "...", "value": [BusStopRow, ...]}
//!   bus_routes.json     {"odata.metadata": "...", "value": [BusRouteRow, ...]}
//!   train_stations.csv  type,code,name,latitude,longitude (no header; optional)
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    Coordinates, Direction, DomainError, OperatingWindow, ServiceNo, ServiceTimetable, Station,
    StationCode, StopCode, StopRecord, StopSequenceEntry,
};

use super::error::NetworkError;

pub const STOPS_FILE: &str = "bus_stops.json";
pub const ROUTES_FILE: &str = "bus_routes.json";
pub const STATIONS_FILE: &str = "train_stations.csv";

/// The OData wrapper around every table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    #[serde(rename = "odata.metadata", default)]
    pub metadata: String,
    pub value: Vec<T>,
}

/// A row of the bus stops table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStopRow {
    pub bus_stop_code: String,
    #[serde(default)]
    pub road_name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl BusStopRow {
    pub fn to_record(&self) -> Result<StopRecord, DomainError> {
        Ok(StopRecord::new(
            StopCode::new(&self.bus_stop_code)?,
            self.road_name.trim(),
            self.description.trim(),
            Coordinates::new(self.latitude, self.longitude),
        ))
    }
}

/// A row of the bus routes table.
///
/// First/last bus columns hold `"HHMM"` or `"-"` when the service does not
/// run that day.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusRouteRow {
    pub service_no: String,
    #[serde(default)]
    pub operator: String,
    pub direction: u8,
    pub stop_sequence: u32,
    pub bus_stop_code: String,
    /// Cumulative distance from the route's origin, in km.
    pub distance: f64,
    #[serde(rename = "WD_FirstBus", default)]
    pub wd_first_bus: String,
    #[serde(rename = "WD_LastBus", default)]
    pub wd_last_bus: String,
    #[serde(rename = "SAT_FirstBus", default)]
    pub sat_first_bus: String,
    #[serde(rename = "SAT_LastBus", default)]
    pub sat_last_bus: String,
    #[serde(rename = "SUN_FirstBus", default)]
    pub sun_first_bus: String,
    #[serde(rename = "SUN_LastBus", default)]
    pub sun_last_bus: String,
}

impl BusRouteRow {
    pub fn timetable(&self) -> ServiceTimetable {
        ServiceTimetable {
            weekday: OperatingWindow::parse(&self.wd_first_bus, &self.wd_last_bus),
            saturday: OperatingWindow::parse(&self.sat_first_bus, &self.sat_last_bus),
            sunday: OperatingWindow::parse(&self.sun_first_bus, &self.sun_last_bus),
        }
    }

    pub fn to_entry(&self) -> Result<StopSequenceEntry, DomainError> {
        let entry = StopSequenceEntry::new(
            ServiceNo::new(&self.service_no)?,
            Direction::from_number(self.direction)?,
            self.stop_sequence,
            StopCode::new(&self.bus_stop_code)?,
            self.distance,
        )?;
        Ok(entry.with_timetable(self.timetable()))
    }
}

/// A row of the rail station table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRow {
    pub kind: String,
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationRow {
    pub fn to_station(&self) -> Result<Station, DomainError> {
        Ok(Station {
            code: StationCode::new(&self.code)?,
            kind: self.kind.trim().to_string(),
            name: self.name.trim().to_string(),
            location: Coordinates::new(self.latitude, self.longitude),
        })
    }
}

/// Raw rows of a dataset directory.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub stops: Vec<BusStopRow>,
    pub routes: Vec<BusRouteRow>,
    pub stations: Vec<StationRow>,
}

impl Dataset {
    /// Load `bus_stops.json` and `bus_routes.json` from `dir`, plus
    /// `train_stations.csv` when present.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let dir = dir.as_ref();
        let stops = read_rows(&dir.join(STOPS_FILE))?;
        let routes = read_rows(&dir.join(ROUTES_FILE))?;

        let stations_path = dir.join(STATIONS_FILE);
        let stations = if stations_path.exists() {
            read_stations(&stations_path)?
        } else {
            info!(path = %stations_path.display(), "no station table; station targets disabled");
            Vec::new()
        };

        info!(
            dir = %dir.display(),
            stops = stops.len(),
            route_rows = routes.len(),
            stations = stations.len(),
            "loaded bus network dataset"
        );
        Ok(Self {
            stops,
            routes,
            stations,
        })
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, NetworkError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let envelope: Envelope<T> =
        serde_json::from_str(&contents).map_err(|source| NetworkError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(envelope.value)
}

fn read_stations(path: &Path) -> Result<Vec<StationRow>, NetworkError> {
    let to_error = |source: csv::Error| NetworkError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(to_error)?;
    reader
        .into_deserialize()
        .collect::<Result<Vec<StationRow>, _>>()
        .map_err(to_error)
}
