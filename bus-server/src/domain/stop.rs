//! Physical bus stop records.

use std::fmt;

use super::{Coordinates, StopCode};

/// Identity and geography of a physical bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub code: StopCode,
    pub road_name: String,
    pub description: String,
    pub location: Coordinates,
}

impl StopRecord {
    pub fn new(
        code: StopCode,
        road_name: impl Into<String>,
        description: impl Into<String>,
        location: Coordinates,
    ) -> Self {
        Self {
            code,
            road_name: road_name.into(),
            description: description.into(),
            location,
        }
    }
}

impl fmt::Display for StopRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.description)
    }
}
