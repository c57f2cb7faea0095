//! Bus stop code type and the opposite-side-of-the-road convention.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid bus stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A bus stop code as published by the transit authority.
///
/// Codes are opaque strings (usually 5 digits, campus shuttles use longer
/// ones). The only validation is that they must be non-empty, which makes
/// [`StopCode::opposite`] total.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StopCode;
///
/// let code = StopCode::new("18331").unwrap();
/// assert_eq!(code.opposite().as_str(), "18339");
///
/// // Empty strings are rejected
/// assert!(StopCode::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopCode(String);

impl StopCode {
    /// Create a stop code, trimming surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, InvalidStopCode> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidStopCode {
                reason: "stop code cannot be empty",
            });
        }
        Ok(StopCode(trimmed.to_string()))
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The paired stop on the other side of the road.
    ///
    /// Codes ending in `9` pair with the same prefix ending in `1`, and vice
    /// versa. Any other code has no pair and is its own opposite.
    pub fn opposite(&self) -> StopCode {
        let (prefix, last) = self.0.split_at(self.0.len() - last_char_len(&self.0));
        let paired = match last {
            "9" => '1',
            "1" => '9',
            _ => return self.clone(),
        };
        let mut code = String::with_capacity(self.0.len());
        code.push_str(prefix);
        code.push(paired);
        StopCode(code)
    }

    /// Returns true if this stop has a distinct paired stop.
    pub fn has_opposite(&self) -> bool {
        self.0.ends_with('1') || self.0.ends_with('9')
    }

    /// Returns true if `other` is this stop's paired stop.
    pub fn is_opposite_of(&self, other: &StopCode) -> bool {
        self.has_opposite() && self.opposite() == *other
    }
}

fn last_char_len(s: &str) -> usize {
    s.chars().next_back().map_or(0, char::len_utf8)
}

impl TryFrom<String> for StopCode {
    type Error = InvalidStopCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StopCode::new(s)
    }
}

impl From<StopCode> for String {
    fn from(code: StopCode) -> Self {
        code.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StopCode {
        StopCode::new(s).unwrap()
    }

    #[test]
    fn reject_empty() {
        assert!(StopCode::new("").is_err());
        assert!(StopCode::new("   ").is_err());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(code(" 18331 ").as_str(), "18331");
    }

    #[test]
    fn opposite_of_nine_is_one() {
        assert_eq!(code("18339").opposite(), code("18331"));
        assert_eq!(code("1000169").opposite(), code("1000161"));
    }

    #[test]
    fn opposite_of_one_is_nine() {
        assert_eq!(code("18331").opposite(), code("18339"));
        assert_eq!(code("1").opposite(), code("9"));
    }

    #[test]
    fn other_codes_are_their_own_opposite() {
        assert_eq!(code("18335").opposite(), code("18335"));
        assert_eq!(code("B07").opposite(), code("B07"));
        assert!(!code("18335").has_opposite());
    }

    #[test]
    fn is_opposite_of() {
        assert!(code("16171").is_opposite_of(&code("16179")));
        assert!(code("16179").is_opposite_of(&code("16171")));
        assert!(!code("16171").is_opposite_of(&code("16171")));
        assert!(!code("16175").is_opposite_of(&code("16175")));
    }

    #[test]
    fn non_ascii_suffix_is_left_alone() {
        assert_eq!(code("stopé").opposite(), code("stopé"));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", code("18331")), "18331");
        assert_eq!(format!("{:?}", code("18331")), "StopCode(18331)");
    }

    #[test]
    fn serde_roundtrip_rejects_empty() {
        let parsed: StopCode = serde_json::from_str("\"18331\"").unwrap();
        assert_eq!(parsed, code("18331"));
        assert!(serde_json::from_str::<StopCode>("\"\"").is_err());
    }
}
