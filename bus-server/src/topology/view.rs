//! A cursor over one service's route.
//!
//! A passenger looking at a route picks a stop to start from, then maybe
//! another stop on the already-shortened route, and so on. Each pick is
//! relative to what is displayed, so the view remembers how far the displayed
//! route has been shifted from the published one.

use serde::Serialize;

use crate::domain::RouteStopPair;

use super::classify::is_loop;
use super::loop_region::loop_region;
use super::truncate::truncate_from;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The published route, untouched.
    Full,
    /// Starting from a chosen stop.
    Truncated,
    /// The remainder of a loop service after one lap.
    AfterLoop,
}

#[derive(Debug, Clone)]
pub struct RouteView {
    original: Vec<RouteStopPair>,
    displayed: Vec<RouteStopPair>,
    offset: u32,
    mode: ViewMode,
}

impl RouteView {
    pub fn new(original: Vec<RouteStopPair>) -> Self {
        let displayed = original.clone();
        Self {
            original,
            displayed,
            offset: 0,
            mode: ViewMode::Full,
        }
    }

    /// Rebuild a view previously started `offset` ordinals into the route,
    /// for callers that keep only the offset between picks.
    pub fn resumed(original: Vec<RouteStopPair>, offset: u32) -> Self {
        let mut view = Self::new(original);
        if offset > 0 {
            view.displayed = truncate_from(&view.original, offset, true);
            view.offset = offset;
            view.mode = ViewMode::Truncated;
        }
        view
    }

    pub fn original(&self) -> &[RouteStopPair] {
        &self.original
    }

    pub fn displayed(&self) -> &[RouteStopPair] {
        &self.displayed
    }

    /// How far the displayed ordinals are shifted from the published ones.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_loop(&self) -> bool {
        !self.original.is_empty() && is_loop(&self.original)
    }

    /// Only a service that does not come back on itself has a meaningful
    /// other direction.
    pub fn can_reverse(&self) -> bool {
        !self.original.is_empty() && !is_loop(&self.original)
    }

    /// Start the displayed route at `displayed_seq`, an ordinal of the
    /// currently displayed route.
    ///
    /// With one stop or fewer displayed there is nothing to pick from, and
    /// the view resets to the published route instead.
    pub fn start_from(&mut self, displayed_seq: u32) {
        if self.displayed.len() <= 1 {
            self.reset();
            return;
        }

        let absolute = displayed_seq.saturating_add(self.offset);
        self.displayed = truncate_from(&self.original, absolute, true);
        // A lap of an n-stop loop spans n - 1 ordinals.
        let lap = (self.original.len() as u32).saturating_sub(1);
        self.offset = absolute.checked_rem(lap).unwrap_or(0);
        self.mode = ViewMode::Truncated;
    }

    /// Display what is left of a loop service after its first lap.
    pub fn start_after_loop(&mut self) {
        if self.original.is_empty() {
            return;
        }
        let region = loop_region(&self.original, true);
        self.displayed = region.route;
        self.offset = region.offset;
        self.mode = ViewMode::AfterLoop;
    }

    pub fn reset(&mut self) {
        self.displayed = self.original.clone();
        self.offset = 0;
        self.mode = ViewMode::Full;
    }
}
