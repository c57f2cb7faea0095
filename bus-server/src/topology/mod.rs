//! Route topology: loops, truncation, and where a loop's lap ends.
//!
//! Everything here is a pure function over a borrowed route. The only
//! conventions involved are the opposite-stop pairing of
//! [`StopCode::opposite`](crate::domain::StopCode::opposite) and the origin
//! revisit rule in [`truncate_from`].

mod classify;
mod loop_region;
mod truncate;
mod view;


pub use classify::{LoopEvidence, is_loop};
pub use loop_region::{LoopRegion, loop_region};
pub use truncate::truncate_from;
pub use view::{RouteView, ViewMode};
