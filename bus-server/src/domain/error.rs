//! Domain error types.
//!
//! These errors represent validation failures when building route rows
//! from raw feed data. They are distinct from dataset/IO errors.

use super::{InvalidDirection, InvalidServiceNo, InvalidStationCode, InvalidStopCode, StopCode};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    StopCode(#[from] InvalidStopCode),

    #[error(transparent)]
    ServiceNo(#[from] InvalidServiceNo),

    #[error(transparent)]
    Direction(#[from] InvalidDirection),

    #[error(transparent)]
    StationCode(#[from] InvalidStationCode),

    /// Cumulative distance is negative or not a number
    #[error("invalid cumulative distance: {0}")]
    InvalidDistance(f64),

    /// A route row was joined with the wrong stop record
    #[error("route row for stop {entry} joined with stop {stop}")]
    MismatchedStop { entry: StopCode, stop: StopCode },
}
