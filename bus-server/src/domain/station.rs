//! Rail stations used as transfer targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A rail station code (e.g. "CC24", "NS1").
///
/// Codes are matched case-insensitively, so they are stored uppercase.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StationCode;
///
/// let code = StationCode::new(" cc24 ").unwrap();
/// assert_eq!(code.as_str(), "CC24");
///
/// assert!(StationCode::new("").is_err());
/// assert!(StationCode::new("CC 24").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationCode(String);

impl StationCode {
    pub fn new(s: impl AsRef<str>) -> Result<Self, InvalidStationCode> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidStationCode {
                reason: "station code cannot be empty",
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidStationCode {
                reason: "station code must be letters and digits",
            });
        }
        Ok(StationCode(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationCode {
    type Error = InvalidStationCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationCode::new(s)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rail station a passenger may want to reach by bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub code: StationCode,
    /// "MRT" or "LRT"
    pub kind: String,
    pub name: String,
    pub location: Coordinates,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}
