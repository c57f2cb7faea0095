//! Truncating a route to start at a given stop.

use tracing::{debug, warn};

use crate::domain::RouteStopPair;

use super::classify::{LoopEvidence, is_loop};
use super::loop_region::loop_region;

/// The part of `route` a passenger boarding at ordinal `start` can ride.
///
/// Entries before `start` are dropped. If the dropped part (plus the first
/// kept entry) passes back through the route's origin, the service keeps
/// going round, so one more traversal of the whole route is appended,
/// shifted to continue from the kept tail's last ordinal and distance.
///
/// With `rebase`, ordinals and distances are made relative to the first
/// kept entry, so the result starts at `(0, 0.0)`.
///
/// Loop routes are cut to a single traversal of the loop from `start`.
///
/// A `start` past the end yields an empty route. The input is never
/// modified.
pub fn truncate_from(route: &[RouteStopPair], start: u32, rebase: bool) -> Vec<RouteStopPair> {
    let Some(first) = route.first() else {
        return Vec::new();
    };
    let last_index = route.len() - 1;

    let mut kept_from = route.len();
    let mut reentry = None;
    for (i, pair) in route.iter().enumerate() {
        if reentry.is_none() && i != 0 && i != last_index {
            let evidence = LoopEvidence::between(&first.stop, &pair.stop);
            if evidence.conflicting() {
                warn!(
                    service = %first.entry.service_no,
                    direction = %first.entry.direction,
                    origin = %first.code(),
                    revisit = %pair.code(),
                    "stop shares the origin's description but not its code"
                );
            }
            if evidence.is_loop() {
                reentry = Some(pair.stop_sequence());
            }
        }
        if pair.stop_sequence() >= start {
            kept_from = i;
            break;
        }
    }

    let mut truncated = route[kept_from..].to_vec();

    if let (Some(revisit), Some(anchor)) = (reentry, truncated.last()) {
        let (shift_seq, shift_km) = (anchor.stop_sequence(), anchor.distance_km());
        debug!(
            service = %first.entry.service_no,
            direction = %first.entry.direction,
            start,
            revisit,
            shift_seq,
            shift_km,
            "route passes its origin before the boarding stop; appending another lap"
        );
        let lap: Vec<_> = route
            .iter()
            .map(|p| p.repositioned(p.stop_sequence() + shift_seq, p.distance_km() + shift_km))
            .collect();
        truncated.extend(lap);
    }

    if rebase {
        truncated = rebased(&truncated);
    }

    if truncated.is_empty() || !is_loop(route) {
        return truncated;
    }
    loop_region(&truncated, false).route
}

/// Shift ordinals and distances so the first entry is at `(0, 0.0)`.
fn rebased(route: &[RouteStopPair]) -> Vec<RouteStopPair> {
    let Some(first) = route.first() else {
        return Vec::new();
    };
    let (base_seq, base_km) = (first.stop_sequence(), first.distance_km());
    route
        .iter()
        .map(|p| {
            p.repositioned(
                p.stop_sequence().saturating_sub(base_seq),
                p.distance_km() - base_km,
            )
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::{distances, pair};
    use proptest::prelude::*;

    /// Linear routes with distinct, unpaired stop codes and 0.1 km steps.
    fn linear_route() -> impl Strategy<Value = Vec<RouteStopPair>> {
        prop::collection::vec(1u32..30, 1..20).prop_map(|steps| {
            let mut km_tenths = 0u32;
            steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    if i > 0 {
                        km_tenths += step;
                    }
                    let code = format!("5{:03}0", i);
                    pair(i as u32, &code, &format!("Stop {i}"), f64::from(km_tenths) / 10.0)
                })
                .collect()
        })
    }

    /// Routes over a small pool of paired codes, so loops and revisits occur.
    fn tangled_route() -> impl Strategy<Value = Vec<RouteStopPair>> {
        prop::collection::vec((0u8..6, any::<bool>(), 0u32..20), 1..25).prop_map(|stops| {
            let mut km_tenths = 0u32;
            stops
                .iter()
                .enumerate()
                .map(|(i, &(site, far_side, step))| {
                    if i > 0 {
                        km_tenths += step;
                    }
                    let suffix = if far_side { '9' } else { '1' };
                    let code = format!("4{site}00{suffix}");
                    let description = format!("Site {site} {suffix}");
                    pair(i as u32, &code, &description, f64::from(km_tenths) / 10.0)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn from_zero_leaves_linear_routes_alone(route in linear_route()) {
            let truncated = truncate_from(&route, 0, true);
            prop_assert_eq!(truncated, route);
        }

        #[test]
        fn rebased_routes_start_at_origin(route in tangled_route(), start in 0u32..30) {
            let truncated = truncate_from(&route, start, true);
            if let Some(first) = truncated.first() {
                prop_assert_eq!(first.stop_sequence(), 0);
                prop_assert_eq!(first.distance_km(), 0.0);
            }
        }

        #[test]
        fn distances_never_decrease(route in tangled_route(), start in 0u32..30, rebase in any::<bool>()) {
            let km = distances(&truncate_from(&route, start, rebase));
            for w in km.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
        }

        #[test]
        fn starts_at_or_after_requested_stop(route in tangled_route(), start in 0u32..30) {
            let truncated = truncate_from(&route, start, false);
            if let Some(first) = truncated.first() {
                prop_assert!(first.stop_sequence() >= start);
            }
            let past_end = route.last().map_or(true, |p| p.stop_sequence() < start);
            prop_assert_eq!(truncated.is_empty(), past_end);
        }
    }
}
