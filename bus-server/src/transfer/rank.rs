//! Ordering transfer matches for display.

use serde::Deserialize;

use super::matcher::TransferMatch;

/// What a passenger wants to minimise when choosing between matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOrder {
    /// Walk to the boarding stop plus walk from the alighting stop.
    #[default]
    WalkingDistance,
    /// Stops ridden between boarding and alighting.
    NumberOfStops,
    /// Walk to the boarding stop only.
    BoardingStop,
}

/// Sort matches best-first by `order`.
///
/// The sort is stable, so ties keep the order the matcher found them in.
pub fn rank_matches(mut matches: Vec<TransferMatch>, order: TransferOrder) -> Vec<TransferMatch> {
    match order {
        TransferOrder::WalkingDistance => matches.sort_by_key(TransferMatch::total_walk_metres),
        TransferOrder::NumberOfStops => matches.sort_by_key(TransferMatch::stops_travelled),
        TransferOrder::BoardingStop => matches.sort_by_key(|m| m.boarding.walk_metres),
    }
    matches
}
