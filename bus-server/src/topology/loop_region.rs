//! Loop-region boundary detection.
//!
//! A loop service eventually drives back past stops it already served, on
//! the other side of the road. The walk below finds the first point where
//! that happens: a stop whose opposite was seen earlier, other than the stop
//! immediately before it (a bus turning round at a terminus serves a pair
//! back to back, which is not a closure).

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{RouteStopPair, StopCode};

use super::truncate::truncate_from;

/// Result of a loop-region walk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopRegion {
    /// Ordinal the remainder starts from (0 unless resuming).
    pub offset: u32,
    /// The loop traversal, or the remainder after it when resuming.
    pub route: Vec<RouteStopPair>,
}

/// Where a single traversal of a loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Boundary {
    /// Index of the first entry past the traversal.
    end: usize,
    /// Ordinal the route should resume from after the traversal.
    resume_at: u32,
}

/// Find one traversal of a loop, or the remainder of the route after it.
///
/// With `resume_after == false` the result is the prefix of `route` up to
/// (not including) the stop that closes the loop, with offset 0. With
/// `resume_after == true` the result is `truncate_from(route, offset)`,
/// where `offset` is the ordinal just past the earlier visit to the other
/// side of the closing stop.
///
/// # Panics
///
/// Panics if `route` is empty.
pub fn loop_region(route: &[RouteStopPair], resume_after: bool) -> LoopRegion {
    assert!(!route.is_empty(), "loop region needs a non-empty route");

    let boundary = find_boundary(route);
    if resume_after {
        LoopRegion {
            offset: boundary.resume_at,
            route: truncate_from(route, boundary.resume_at, true),
        }
    } else {
        LoopRegion {
            offset: 0,
            route: route[..boundary.end].to_vec(),
        }
    }
}

fn find_boundary(route: &[RouteStopPair]) -> Boundary {
    // Latest ordinal each paired stop was served at.
    let mut seen: HashMap<&StopCode, u32> = HashMap::new();
    let mut last_seen: Option<&StopCode> = None;

    for (i, pair) in route.iter().enumerate() {
        let code = pair.code();
        if !code.has_opposite() {
            last_seen = None;
            continue;
        }

        let opposite = code.opposite();
        if let Some(&ordinal) = seen.get(&opposite) {
            if last_seen != Some(&opposite) {
                trace!(
                    closing_stop = %code,
                    closing_sequence = pair.stop_sequence(),
                    earlier_sequence = ordinal,
                    "loop closes"
                );
                return Boundary {
                    end: i,
                    resume_at: ordinal + 1,
                };
            }
        }

        seen.insert(code, pair.stop_sequence());
        last_seen = Some(code);
    }

    let last = route[route.len() - 1].stop_sequence();
    Boundary {
        end: route.len(),
        resume_at: last + 1,
    }
}
