//! Which services take a passenger from where they are towards a target.

use tracing::debug;

use crate::domain::{Coordinates, RouteStopPair};
use crate::network::{RouteSource, find_nearby_stops};

use super::config::TransferConfig;
use super::matcher::{TransferMatch, TransferQuery, WalkPoint, match_transfers};

/// The outcome of a search, with the distances it was judged against.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSearch {
    /// Walking straight from origin to target.
    pub direct_metres: u32,
    /// The walking budget actually applied.
    pub budget_metres: u32,
    pub matches: Vec<TransferMatch>,
}

/// Find services that shorten the walk from `origin` to `target`.
///
/// The walking budget never exceeds the direct walk: a bus that saves no
/// walking is no use. Every route row at every stop within the budget of
/// the origin (nearest `max_boarding_stops` stops) is a boarding candidate.
pub fn find_services_to<S, D>(
    origin: Coordinates,
    target: Coordinates,
    budget_metres: u32,
    source: &S,
    distance: D,
    config: &TransferConfig,
) -> TransferSearch
where
    S: RouteSource + ?Sized,
    D: Fn(Coordinates, Coordinates) -> u32,
{
    let direct = distance(origin, target);
    let budget = budget_metres.min(direct);

    let nearby = find_nearby_stops(origin, budget, source, &distance, config.max_boarding_stops);
    let candidates: Vec<WalkPoint> = nearby
        .into_iter()
        .flat_map(|(walk, stop)| {
            source
                .routes_at_stop(&stop.code)
                .into_iter()
                .map(move |entry| {
                    WalkPoint::new(
                        walk,
                        RouteStopPair {
                            entry,
                            stop: stop.clone(),
                        },
                    )
                })
        })
        .collect();

    debug!(
        direct,
        budget,
        candidates = candidates.len(),
        "searching for services towards target"
    );

    let query = TransferQuery {
        origin,
        target,
        budget_metres: budget,
    };
    TransferSearch {
        direct_metres: direct,
        budget_metres: budget,
        matches: match_transfers(&query, candidates, source, distance),
    }
}
