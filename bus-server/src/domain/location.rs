//! Geographic coordinates and the default walking-distance function.

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// Great-circle distance between two points, in whole metres.
///
/// This is the default distance function handed to the route engine.
/// It is symmetric and never negative.
pub fn great_circle_metres(a: Coordinates, b: Coordinates) -> u32 {
    let metres = a.to_point().haversine_distance(&b.to_point());
    if metres.is_finite() {
        metres.max(0.0) as u32
    } else {
        u32::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(1.2949181152540041, 103.77493256351714);
        assert_eq!(great_circle_metres(p, p), 0);
    }

    #[test]
    fn campus_stops_are_a_few_hundred_metres_apart() {
        // COM 3 to Kent Ridge Stn Exit A/NUH
        let com3 = Coordinates::new(1.2949181152540041, 103.77493256351714);
        let kent_ridge = Coordinates::new(1.2948117103061263, 103.78437918054274);
        let d = great_circle_metres(com3, kent_ridge);
        assert!((1000..1100).contains(&d), "got {d}");
    }

    #[test]
    fn validity() {
        assert!(Coordinates::new(1.3, 103.8).is_valid());
        assert!(!Coordinates::new(91.0, 103.8).is_valid());
        assert!(!Coordinates::new(1.3, f64::NAN).is_valid());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coords() -> impl Strategy<Value = Coordinates> {
        (1.2f64..1.5, 103.6f64..104.0).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
    }

    proptest! {
        /// Distance is symmetric (up to a metre of truncation)
        #[test]
        fn symmetric(a in coords(), b in coords()) {
            let ab = great_circle_metres(a, b);
            let ba = great_circle_metres(b, a);
            prop_assert!(ab.abs_diff(ba) <= 1);
        }

        /// Triangle inequality holds up to truncation
        #[test]
        fn triangle(a in coords(), b in coords(), c in coords()) {
            let ab = great_circle_metres(a, b) as u64;
            let bc = great_circle_metres(b, c) as u64;
            let ac = great_circle_metres(a, c) as u64;
            prop_assert!(ac <= ab + bc + 2);
        }
    }
}
