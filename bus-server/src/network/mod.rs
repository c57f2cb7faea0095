//! Bus network data: stops, published routes, and where to get them.
//!
//! The topology engine and transfer matcher only see routes through the
//! [`RouteSource`] trait. [`InMemoryNetwork`] serves a dataset loaded from
//! disk; [`CachedRouteSource`] memoises joined routes in front of any source.

mod cache;
mod dataset;
mod error;
mod memory;
mod nearby;

use std::sync::Arc;

use crate::domain::{
    Direction, RouteStopPair, ServiceNo, Station, StationCode, StopCode, StopRecord,
    StopSequenceEntry,
};

pub use cache::{CacheConfig, CachedRouteSource};
pub use dataset::{
    BusRouteRow, BusStopRow, Dataset, Envelope, ROUTES_FILE, STATIONS_FILE, STOPS_FILE, StationRow,
};
pub use error::NetworkError;
pub use memory::InMemoryNetwork;
pub use nearby::{distances_from_point, find_nearby_stops};

/// Read access to stops and published routes.
pub trait RouteSource: Send + Sync {
    /// The full route for one service and direction, ordered by stop
    /// sequence. Empty if the service is unknown.
    fn fetch_route(&self, service: &ServiceNo, direction: Direction) -> Vec<RouteStopPair>;

    fn fetch_stop(&self, code: &StopCode) -> Option<StopRecord>;

    fn all_stops(&self) -> Vec<StopRecord>;

    /// Every route row that serves `code`, across all services.
    fn routes_at_stop(&self, code: &StopCode) -> Vec<StopSequenceEntry>;

    fn fetch_station(&self, code: &StationCode) -> Option<Station>;
}

impl<S: RouteSource + ?Sized> RouteSource for Arc<S> {
    fn fetch_route(&self, service: &ServiceNo, direction: Direction) -> Vec<RouteStopPair> {
        (**self).fetch_route(service, direction)
    }

    fn fetch_stop(&self, code: &StopCode) -> Option<StopRecord> {
        (**self).fetch_stop(code)
    }

    fn all_stops(&self) -> Vec<StopRecord> {
        (**self).all_stops()
    }

    fn routes_at_stop(&self, code: &StopCode) -> Vec<StopSequenceEntry> {
        (**self).routes_at_stop(code)
    }

    fn fetch_station(&self, code: &StationCode) -> Option<Station> {
        (**self).fetch_station(code)
    }
}
