//! Coordinate type and distance functions.
//!
//! Two metrics are supported:
//! - Euclidean distance for planar data
//! - Great-circle distance for geographic data, where `x` is longitude and
//!   `y` is latitude, both in degrees
//!
//! ## Spherical Ordering
//!
//! Geographic points are indexed as 3-D unit vectors. The straight-line
//! (chord) distance between two unit vectors grows monotonically with the
//! angle between them, so a nearest-neighbour search on chords yields the
//! same ordering as one on great-circle arcs.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Mean Earth radius in metres used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A 2D coordinate (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns true if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Calculates the great-circle distance between two `(longitude, latitude)`
/// coordinates on a sphere of the given radius, using the Haversine formula.
pub fn great_circle_distance(a: &Coordinate, b: &Coordinate, radius: f64) -> f64 {
    let lat1_rad = a.y.to_radians();
    let lat2_rad = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h slightly above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    radius * c
}

/// Converts a `(longitude, latitude)` coordinate in degrees to a point on
/// the unit sphere.
pub fn to_unit_vector(coordinate: &Coordinate) -> [f64; 3] {
    let lon = coordinate.x.to_radians();
    let lat = coordinate.y.to_radians();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Converts a chord length between two unit vectors to the arc length on a
/// sphere of the given radius.
pub(crate) fn chord_to_arc(chord: f64, radius: f64) -> f64 {
    2.0 * (chord / 2.0).min(1.0).asin() * radius
}
