//! Bus service number and direction types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid service number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service number: {reason}")]
pub struct InvalidServiceNo {
    reason: &'static str,
}

/// A bus service number (e.g. "96", "1004A").
///
/// Service numbers are opaque; the only validation is that they must be
/// non-empty.
///
/// # Examples
///
/// ```
/// use bus_server::domain::ServiceNo;
///
/// let svc = ServiceNo::new("1004A").unwrap();
/// assert_eq!(svc.as_str(), "1004A");
///
/// assert!(ServiceNo::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceNo(String);

impl ServiceNo {
    /// Create a service number, trimming surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, InvalidServiceNo> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidServiceNo {
                reason: "service number cannot be empty",
            });
        }
        Ok(ServiceNo(trimmed.to_string()))
    }

    /// Returns the service number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceNo {
    type Error = InvalidServiceNo;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ServiceNo::new(s)
    }
}

impl From<ServiceNo> for String {
    fn from(svc: ServiceNo) -> Self {
        svc.0
    }
}

impl fmt::Debug for ServiceNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceNo({})", self.0)
    }
}

impl fmt::Display for ServiceNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a direction number is not 1 or 2.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {0}: must be 1 or 2")]
pub struct InvalidDirection(pub u8);

/// Direction of travel of a bus service.
///
/// The feed numbers directions 1 and 2. Loop services only have direction 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    /// Direction 1.
    Outbound,
    /// Direction 2.
    Inbound,
}

impl Direction {
    /// Parse a feed direction number.
    pub fn from_number(n: u8) -> Result<Self, InvalidDirection> {
        match n {
            1 => Ok(Direction::Outbound),
            2 => Ok(Direction::Inbound),
            other => Err(InvalidDirection(other)),
        }
    }

    /// The feed direction number.
    pub fn number(self) -> u8 {
        match self {
            Direction::Outbound => 1,
            Direction::Inbound => 2,
        }
    }

    /// The other direction of the same service.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Outbound => Direction::Inbound,
            Direction::Inbound => Direction::Outbound,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Direction::from_number(n)
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d.number()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
