//! Finding buses that shorten a walk.
//!
//! Given an origin, a target and a walking budget, pick boarding stops near
//! the origin and, for each service calling there, the stop along the route
//! nearest the target.

mod config;
mod matcher;
mod rank;
mod services;

pub use config::TransferConfig;
pub use matcher::{MatchSummary, TransferMatch, TransferQuery, WalkPoint, match_transfers};
pub use rank::{TransferOrder, rank_matches};
pub use services::{TransferSearch, find_services_to};
