//! Caching layer for joined routes.
//!
//! Joining a route's rows with their stop records is repeated for every
//! candidate the transfer matcher considers, and the same few services come
//! up again and again. Routes are cached per `(service, direction)`.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::domain::{
    Direction, RouteStopPair, ServiceNo, Station, StationCode, StopCode, StopRecord,
    StopSequenceEntry,
};

use super::RouteSource;

type RouteKey = (ServiceNo, Direction);

type RouteEntry = Arc<Vec<RouteStopPair>>;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached routes.
    pub ttl: Duration,

    /// Maximum number of cached routes.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// A [`RouteSource`] that memoises `fetch_route` of the source it wraps.
///
/// Stop lookups pass straight through.
pub struct CachedRouteSource<S> {
    inner: S,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl<S: RouteSource> CachedRouteSource<S> {
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Access the wrapped source for lookups that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<S: RouteSource> RouteSource for CachedRouteSource<S> {
    fn fetch_route(&self, service: &ServiceNo, direction: Direction) -> Vec<RouteStopPair> {
        let key = (service.clone(), direction);
        let route = self.routes.get_with(key, || {
            trace!(%service, %direction, "route cache miss");
            Arc::new(self.inner.fetch_route(service, direction))
        });
        route.as_ref().clone()
    }

    fn fetch_stop(&self, code: &StopCode) -> Option<StopRecord> {
        self.inner.fetch_stop(code)
    }

    fn all_stops(&self) -> Vec<StopRecord> {
        self.inner.all_stops()
    }

    fn routes_at_stop(&self, code: &StopCode) -> Vec<StopSequenceEntry> {
        self.inner.routes_at_stop(code)
    }

    fn fetch_station(&self, code: &StationCode) -> Option<Station> {
        self.inner.fetch_station(code)
    }
}
