//! Stops within walking distance of a point.

use crate::domain::{Coordinates, RouteStopPair, StopRecord};

use super::RouteSource;

/// Stops strictly closer than `threshold_metres` to `point`, nearest first,
/// at most `limit` of them. Each stop comes with its distance in metres.
///
/// Ties keep the source's stop order.
pub fn find_nearby_stops<S, D>(
    point: Coordinates,
    threshold_metres: u32,
    source: &S,
    distance: D,
    limit: usize,
) -> Vec<(u32, StopRecord)>
where
    S: RouteSource + ?Sized,
    D: Fn(Coordinates, Coordinates) -> u32,
{
    let mut nearby: Vec<(u32, StopRecord)> = source
        .all_stops()
        .into_iter()
        .filter_map(|stop| {
            let d = distance(point, stop.location);
            (d < threshold_metres).then_some((d, stop))
        })
        .collect();
    nearby.sort_by_key(|(d, _)| *d);
    nearby.truncate(limit);
    nearby
}

/// Distance in metres from `point` to each stop of `route`, in route order.
pub fn distances_from_point<D>(point: Coordinates, route: &[RouteStopPair], distance: D) -> Vec<u32>
where
    D: Fn(Coordinates, Coordinates) -> u32,
{
    route.iter().map(|p| distance(point, p.location())).collect()
}
