//! Loop classification.

use tracing::warn;

use crate::domain::{RouteStopPair, StopRecord};

/// The two independent signals that a route ends where it started.
///
/// The feed marks loop services in two ways: the terminus carries the same
/// description as the origin, or the terminus is the origin's opposite stop.
/// Either is enough to call a route a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopEvidence {
    /// First and last stops have identical descriptions.
    pub same_description: bool,
    /// Last stop code is the first stop's code or its opposite.
    pub matching_code: bool,
}

impl LoopEvidence {
    /// Gather loop evidence from the first and last stops of a route.
    ///
    /// # Panics
    ///
    /// Panics if `route` is empty.
    pub fn of(route: &[RouteStopPair]) -> Self {
        assert!(!route.is_empty(), "loop classification needs a non-empty route");
        Self::between(&route[0].stop, &route[route.len() - 1].stop)
    }

    /// Evidence that `later` is back at the place of `earlier`.
    pub fn between(earlier: &StopRecord, later: &StopRecord) -> Self {
        Self {
            same_description: earlier.description == later.description,
            matching_code: earlier.code == later.code || earlier.code.is_opposite_of(&later.code),
        }
    }

    pub fn is_loop(&self) -> bool {
        self.same_description || self.matching_code
    }

    /// Descriptions say "same place" but the codes are unrelated.
    ///
    /// Opposite stops routinely carry different descriptions ("Opp ..."),
    /// so the reverse disagreement is expected and not reported.
    pub fn conflicting(&self) -> bool {
        self.same_description && !self.matching_code
    }
}

/// Whether a route returns to its starting place.
///
/// # Panics
///
/// Panics if `route` is empty.
///
/// # Examples
///
/// ```should_panic
/// bus_server::topology::is_loop(&[]);
/// ```
pub fn is_loop(route: &[RouteStopPair]) -> bool {
    let evidence = LoopEvidence::of(route);
    if evidence.conflicting() {
        let first = &route[0];
        let last = &route[route.len() - 1];
        warn!(
            service = %first.entry.service_no,
            direction = %first.entry.direction,
            first = %first.code(),
            last = %last.code(),
            description = %first.description(),
            "loop termini share a description but not a stop code pair"
        );
    }
    evidence.is_loop()
}
