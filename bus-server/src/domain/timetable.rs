//! First/last bus timings for a service at a stop.
//!
//! The feed gives first and last bus times as "HHMM" strings per day type.
//! A blank or malformed value means the service does not run that day.
//! Operating windows open 30 minutes before the first bus (so a rider
//! waiting for it sees the service as running) and may wrap past midnight.

use std::fmt;

use chrono::{Datelike, Duration, NaiveTime, Timelike, Weekday};

/// How long before the first bus a service counts as operating.
const LEAD_IN_MINS: i64 = 30;

/// Error returned when parsing an invalid "HHMM" time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus time: {reason}")]
pub struct TimetableError {
    reason: &'static str,
}

impl TimetableError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a feed time in "HHMM" format.
///
/// # Examples
///
/// ```
/// use bus_server::domain::parse_hhmm;
///
/// let t = parse_hhmm("0630").unwrap();
/// assert_eq!(t.to_string(), "06:30:00");
///
/// assert!(parse_hhmm("06:30").is_err());
/// assert!(parse_hhmm("2460").is_err());
/// assert!(parse_hhmm("-").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimetableError> {
    let bytes = s.as_bytes();
    if bytes.len() != 4 {
        return Err(TimetableError::new("expected HHMM format"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimetableError::new("invalid hour digits"))?;
    let minute = parse_two_digits(&bytes[2..4])
        .ok_or_else(|| TimetableError::new("invalid minute digits"))?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimetableError::new("hour must be 0-23 and minute 0-59"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Day types the feed publishes separate timings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    /// The day type of a calendar weekday.
    pub fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }

    /// The day type of a date.
    pub fn of_date(date: impl Datelike) -> Self {
        Self::of(date.weekday())
    }
}

/// First and last bus of one day type.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    pub first: NaiveTime,
    pub last: NaiveTime,
}

impl OperatingWindow {
    pub fn new(first: NaiveTime, last: NaiveTime) -> Self {
        Self { first, last }
    }

    /// Parse a window from feed strings. Returns `None` unless both parse.
    pub fn parse(first: &str, last: &str) -> Option<Self> {
        Some(Self::new(parse_hhmm(first).ok()?, parse_hhmm(last).ok()?))
    }

    /// Whether the service counts as operating at `time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::{OperatingWindow, parse_hhmm};
    ///
    /// let window = OperatingWindow::parse("0600", "2330").unwrap();
    /// assert!(window.is_operating_at(parse_hhmm("0545").unwrap()));
    /// assert!(!window.is_operating_at(parse_hhmm("0520").unwrap()));
    ///
    /// // Night services wrap past midnight
    /// let night = OperatingWindow::parse("2300", "0200").unwrap();
    /// assert!(night.is_operating_at(parse_hhmm("0100").unwrap()));
    /// assert!(!night.is_operating_at(parse_hhmm("1200").unwrap()));
    /// ```
    pub fn is_operating_at(&self, time: NaiveTime) -> bool {
        let (opens, _) = self
            .first
            .overflowing_sub_signed(Duration::minutes(LEAD_IN_MINS));

        if self.last > opens {
            opens <= time && time <= self.last
        } else {
            time >= opens || time <= self.last
        }
    }
}

impl fmt::Debug for OperatingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperatingWindow({self})")
    }
}

impl fmt::Display for OperatingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}-{:02}{:02}",
            self.first.hour(),
            self.first.minute(),
            self.last.hour(),
            self.last.minute()
        )
    }
}

/// First/last bus timings of a service at one stop, per day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceTimetable {
    pub weekday: Option<OperatingWindow>,
    pub saturday: Option<OperatingWindow>,
    pub sunday: Option<OperatingWindow>,
}

impl ServiceTimetable {
    /// The window for a day type, if the service runs that day.
    pub fn window(&self, day: DayType) -> Option<OperatingWindow> {
        match day {
            DayType::Weekday => self.weekday,
            DayType::Saturday => self.saturday,
            DayType::Sunday => self.sunday,
        }
    }

    /// Whether the service runs at all on a day type.
    pub fn operates_on(&self, day: DayType) -> bool {
        self.window(day).is_some()
    }

    /// Whether the service counts as operating at `time` on a day type.
    pub fn is_operating(&self, day: DayType, time: NaiveTime) -> bool {
        self.window(day).is_some_and(|w| w.is_operating_at(time))
    }
}
