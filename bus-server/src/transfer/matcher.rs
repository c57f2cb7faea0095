//! Matching boarding points to the stop nearest a target.
//!
//! Each boarding candidate is a route row within walking distance of the
//! origin. Riding the service from there, the best place to get off is the
//! stop closest to the target that is still within the walking budget left
//! over. Routes are assumed to approach the target and then leave it, so the
//! walk along a route stops at the first local minimum.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{Coordinates, EntryKey, RouteStopPair};
use crate::network::RouteSource;
use crate::topology::truncate_from;

/// Where the passenger is, where they want to be, and how far they will walk
/// in total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferQuery {
    pub origin: Coordinates,
    pub target: Coordinates,
    pub budget_metres: u32,
}

/// A route row together with a walk to or from it.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkPoint {
    pub walk_metres: u32,
    pub pair: RouteStopPair,
}

impl WalkPoint {
    pub fn new(walk_metres: u32, pair: RouteStopPair) -> Self {
        Self { walk_metres, pair }
    }
}

/// Board at `boarding` (walking from the origin), ride, and get off at
/// `alighting` (walking on to the target).
#[derive(Debug, Clone, PartialEq)]
pub struct TransferMatch {
    pub boarding: WalkPoint,
    pub alighting: WalkPoint,
}

impl TransferMatch {
    pub fn total_walk_metres(&self) -> u32 {
        self.boarding.walk_metres + self.alighting.walk_metres
    }

    pub fn stops_travelled(&self) -> u32 {
        self.alighting.pair.stop_sequence() - self.boarding.pair.stop_sequence()
    }

    pub fn summary(&self) -> MatchSummary<'_> {
        MatchSummary {
            service: self.boarding.pair.entry.service_no.as_str(),
            board: self.boarding.pair.code().as_str(),
            alight: self.alighting.pair.code().as_str(),
            walk_metres: self.total_walk_metres(),
        }
    }
}

/// Which service, boarding and alighting where, for logs.
#[derive(Debug, Clone, Copy)]
pub struct MatchSummary<'a> {
    pub service: &'a str,
    pub board: &'a str,
    pub alight: &'a str,
    pub walk_metres: u32,
}

/// For each boarding candidate, find the stop to alight at.
///
/// Candidates are considered nearest first. A route row visited while
/// walking one candidate's route is claimed, and later candidates neither
/// board at nor walk past a claimed row, so no stretch of a route is
/// reported twice.
///
/// A match is reported only when it beats walking: the alighting stop is
/// further along than the boarding stop, the combined walk fits the budget,
/// and it is strictly shorter than walking from origin to target.
pub fn match_transfers<S, D>(
    query: &TransferQuery,
    candidates: Vec<WalkPoint>,
    source: &S,
    distance: D,
) -> Vec<TransferMatch>
where
    S: RouteSource + ?Sized,
    D: Fn(Coordinates, Coordinates) -> u32,
{
    let direct = distance(query.origin, query.target);

    let mut candidates = candidates;
    candidates.sort_by_key(|c| c.walk_metres);

    let mut claimed: HashSet<EntryKey> = HashSet::new();
    let mut matches = Vec::new();

    for boarding in candidates {
        if claimed.contains(&boarding.pair.key()) {
            trace!(
                service = %boarding.pair.entry.service_no,
                stop = %boarding.pair.code(),
                "boarding row already covered by an earlier candidate"
            );
            continue;
        }

        let remaining = query.budget_metres.saturating_sub(boarding.walk_metres);
        let entry = &boarding.pair.entry;
        let full = source.fetch_route(&entry.service_no, entry.direction);
        let downstream = truncate_from(&full, entry.stop_sequence, false);

        let Some(best) = walk_downstream(downstream, query.target, remaining, &distance, &mut claimed)
        else {
            continue;
        };

        let total = boarding.walk_metres + best.walk_metres;
        if best.pair.stop_sequence() > boarding.pair.stop_sequence()
            && total <= query.budget_metres
            && total < direct
        {
            let found = TransferMatch {
                boarding,
                alighting: best,
            };
            debug!(summary = ?found.summary(), direct, "transfer found");
            matches.push(found);
        }
    }

    matches
}

/// Walk a route from the boarding row, claiming rows, and return the row
/// nearest the target within `remaining` metres.
fn walk_downstream<D>(
    downstream: Vec<RouteStopPair>,
    target: Coordinates,
    remaining: u32,
    distance: &D,
    claimed: &mut HashSet<EntryKey>,
) -> Option<WalkPoint>
where
    D: Fn(Coordinates, Coordinates) -> u32,
{
    let mut best: Option<WalkPoint> = None;

    for stop in downstream {
        if !claimed.insert(stop.key()) {
            break;
        }

        let d = distance(stop.location(), target);
        if d <= remaining {
            let best_so_far = best.as_ref().map(|b| b.walk_metres);
            if best_so_far.is_some_and(|b| d > b) {
                break;
            }
            if best_so_far.is_none_or(|b| d < b) {
                best = Some(WalkPoint::new(d, stop));
            }
        } else if best.is_some() {
            break;
        }
    }

    best
}
