//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{OperatingWindow, RouteStopPair, ServiceTimetable, Station, StopRecord};
use crate::topology::{RouteView, ViewMode};
use crate::transfer::{TransferMatch, TransferOrder, WalkPoint};

/// Query for a route view.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Ordinal of the displayed route to start from
    pub from: Option<u32>,

    /// Offset returned with the previously displayed route
    pub offset: Option<u32>,

    /// Point to report each stop's walking distance from
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Query for services towards a target.
///
/// The target is either a rail station code or a coordinate pair.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub target_lat: Option<f64>,
    pub target_lon: Option<f64>,
    pub station: Option<String>,

    /// Total walking budget in metres (defaults to the server's)
    pub budget: Option<u32>,

    /// How to order the results (defaults to total walking distance)
    pub sort: Option<TransferOrder>,
}

/// First/last bus timings per day type, as "HHMM-HHMM".
#[derive(Debug, Serialize)]
pub struct TimetableResult {
    pub weekday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}

impl TimetableResult {
    pub fn from_timetable(timetable: &ServiceTimetable) -> Self {
        let fmt = |w: Option<OperatingWindow>| w.map(|w| w.to_string());
        Self {
            weekday: fmt(timetable.weekday),
            saturday: fmt(timetable.saturday),
            sunday: fmt(timetable.sunday),
        }
    }
}

/// A stop record.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub code: String,
    pub description: String,
    pub road_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StopResult {
    pub fn from_stop(stop: &StopRecord) -> Self {
        Self {
            code: stop.code.to_string(),
            description: stop.description.clone(),
            road_name: stop.road_name.clone(),
            latitude: stop.location.latitude,
            longitude: stop.location.longitude,
        }
    }
}

/// A stop along a displayed route.
#[derive(Debug, Serialize)]
pub struct RouteStopResult {
    pub sequence: u32,
    pub code: String,
    pub description: String,
    pub distance_km: f64,
    pub timetable: TimetableResult,

    /// Walk from the requested point, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_metres: Option<u32>,
}

impl RouteStopResult {
    pub fn from_pair(pair: &RouteStopPair) -> Self {
        Self {
            sequence: pair.stop_sequence(),
            code: pair.code().to_string(),
            description: pair.description().to_string(),
            distance_km: pair.distance_km(),
            timetable: TimetableResult::from_timetable(&pair.entry.timetable),
            walk_metres: None,
        }
    }
}

/// A displayed route and the cursor state needed to pick from it again.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub service: String,
    pub direction: u8,
    pub is_loop: bool,
    pub can_reverse: bool,
    pub mode: ViewMode,
    pub offset: u32,
    pub stops: Vec<RouteStopResult>,
}

impl RouteResponse {
    pub fn from_view(service: &str, direction: u8, view: &RouteView) -> Self {
        Self {
            service: service.to_string(),
            direction,
            is_loop: view.is_loop(),
            can_reverse: view.can_reverse(),
            mode: view.mode(),
            offset: view.offset(),
            stops: view.displayed().iter().map(RouteStopResult::from_pair).collect(),
        }
    }

    /// Attach walking distances to the stops, in displayed order.
    pub fn with_walks(mut self, walks: &[u32]) -> Self {
        for (stop, &walk) in self.stops.iter_mut().zip(walks) {
            stop.walk_metres = Some(walk);
        }
        self
    }
}

/// One end of a bus ride, with the walk to or from it.
#[derive(Debug, Serialize)]
pub struct StopVisitResult {
    pub sequence: u32,
    pub code: String,
    pub description: String,
    pub walk_metres: u32,
}

impl StopVisitResult {
    pub fn from_walk_point(point: &WalkPoint) -> Self {
        Self {
            sequence: point.pair.stop_sequence(),
            code: point.pair.code().to_string(),
            description: point.pair.description().to_string(),
            walk_metres: point.walk_metres,
        }
    }
}

/// A service worth taking towards the target.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    pub service: String,
    pub direction: u8,
    pub board: StopVisitResult,
    pub alight: StopVisitResult,
    pub stops_travelled: u32,
    pub total_walk_metres: u32,
}

impl TransferResult {
    pub fn from_match(m: &TransferMatch) -> Self {
        let entry = &m.boarding.pair.entry;
        Self {
            service: entry.service_no.to_string(),
            direction: entry.direction.number(),
            board: StopVisitResult::from_walk_point(&m.boarding),
            alight: StopVisitResult::from_walk_point(&m.alighting),
            stops_travelled: m.stops_travelled(),
            total_walk_metres: m.total_walk_metres(),
        }
    }
}

/// A rail station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub code: String,
    pub kind: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            code: station.code.to_string(),
            kind: station.kind.clone(),
            name: station.name.clone(),
            latitude: station.location.latitude,
            longitude: station.location.longitude,
        }
    }
}

/// Response for a transfer search.
#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    /// The station searched towards, if the target was one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<StationResult>,
    pub direct_metres: u32,
    pub budget_metres: u32,
    pub transfers: Vec<TransferResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayType, great_circle_metres};
    use crate::test_support::{campus_stop, kent_ridge_station, route_1004a, route_1011};

    #[test]
    fn timetable_result_formats_windows() {
        let timetable = ServiceTimetable {
            weekday: OperatingWindow::parse("0630", "2315"),
            saturday: None,
            sunday: OperatingWindow::parse("0700", "0100"),
        };
        assert!(timetable.operates_on(DayType::Weekday));

        let result = TimetableResult::from_timetable(&timetable);
        assert_eq!(result.weekday.as_deref(), Some("0630-2315"));
        assert_eq!(result.saturday, None);
        assert_eq!(result.sunday.as_deref(), Some("0700-0100"));
    }

    #[test]
    fn route_response_from_view() {
        let mut view = RouteView::new(route_1004a());
        view.start_from(2);
        let response = RouteResponse::from_view("1004A", 1, &view);

        assert!(!response.is_loop);
        assert!(response.can_reverse);
        assert_eq!(response.mode, ViewMode::Truncated);
        assert_eq!(response.offset, 2);
        assert_eq!(response.stops.len(), 3);
        assert_eq!(response.stops[0].code, "18311");
        assert_eq!(response.stops[2].distance_km, 1.1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mode"], "truncated");
        assert_eq!(json["stops"][1]["description"], "Opp University Health Ctr");
    }

    #[test]
    fn walks_attach_in_displayed_order() {
        let view = RouteView::new(route_1004a());
        let response = RouteResponse::from_view("1004A", 1, &view).with_walks(&[900, 700, 500, 300, 0]);
        assert_eq!(response.stops[0].walk_metres, Some(900));
        assert_eq!(response.stops[4].walk_metres, Some(0));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["stops"][3]["walk_metres"], 300);

        let bare = serde_json::to_value(RouteResponse::from_view("1004A", 1, &view)).unwrap();
        assert!(bare["stops"][0].get("walk_metres").is_none());
    }

    #[test]
    fn station_result_from_station() {
        let result = StationResult::from_station(&kent_ridge_station());
        assert_eq!(result.code, "CC24");
        assert_eq!(result.kind, "MRT");
        assert_eq!(result.name, "Kent Ridge");
    }

    #[test]
    fn after_loop_mode_serialises() {
        let mut view = RouteView::new(route_1011());
        view.start_after_loop();
        let json = serde_json::to_value(RouteResponse::from_view("1011", 1, &view)).unwrap();
        assert_eq!(json["mode"], "after_loop");
        assert_eq!(json["offset"], 5);
        assert_eq!(json["is_loop"], true);
    }

    #[test]
    fn transfer_result_from_match() {
        let route = route_1004a();
        let walk = great_circle_metres(campus_stop("18339").location, route[0].location());
        let m = TransferMatch {
            boarding: WalkPoint::new(walk, route[0].clone()),
            alighting: WalkPoint::new(0, route[4].clone()),
        };
        let result = TransferResult::from_match(&m);

        assert_eq!(result.service, "1004A");
        assert_eq!(result.direction, 1);
        assert_eq!(result.board.code, "18331");
        assert_eq!(result.alight.code, "1000109");
        assert_eq!(result.alight.description, "University Town");
        assert_eq!(result.stops_travelled, 4);
        assert_eq!(result.total_walk_metres, walk);
    }

    #[test]
    fn stop_result_from_stop() {
        let result = StopResult::from_stop(&campus_stop("1000169"));
        assert_eq!(result.code, "1000169");
        assert_eq!(result.description, "COM 3");
        assert_eq!(result.road_name, "Kent Ridge Crescent");
    }
}
