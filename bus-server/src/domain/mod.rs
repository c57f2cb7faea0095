//! Domain types for the bus route engine.
//!
//! This module contains the core domain model types that represent
//! validated bus network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod entry;
mod error;
mod location;
mod service_no;
mod station;
mod stop;
mod stop_code;
mod timetable;

pub use entry::{EntryKey, RouteStopPair, StopSequenceEntry, round_km};
pub use error::DomainError;
pub use location::{Coordinates, great_circle_metres};
pub use service_no::{Direction, InvalidDirection, InvalidServiceNo, ServiceNo};
pub use station::{InvalidStationCode, Station, StationCode};
pub use stop::StopRecord;
pub use stop_code::{InvalidStopCode, StopCode};
pub use timetable::{
    DayType, OperatingWindow, ServiceTimetable, TimetableError, parse_hhmm,
};
