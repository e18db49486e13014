//! Axis-role detection and spatial provider selection.
//!
//! A column whose lower-cased name starts with `lon` is treated as
//! longitude, one starting with `lat` as latitude. Geographic columns are
//! put in `(longitude, latitude)` order and get a spherical index. Anything
//! else is treated as planar.

use hotspot_spatial::{Coordinate, PlanarIndex, SpatialQuery, SphericalIndex};

/// Metric used to compare interest points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Euclidean distance on raw coordinates.
    Planar,
    /// Great-circle distance in metres on `(longitude, latitude)`.
    Spherical,
}

/// The table columns used as x and y, after any reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisColumns {
    pub x_column: String,
    pub y_column: String,
    pub coordinate_system: CoordinateSystem,
}

impl AxisColumns {
    /// Resolves the x and y columns given on the command line.
    pub fn detect(x_column: &str, y_column: &str) -> Self {
        let (x_column, y_column) = if is_latitude(x_column) && is_longitude(y_column) {
            log::debug!("Swapping {} and {} to (longitude, latitude) order", x_column, y_column);
            (y_column, x_column)
        } else {
            (x_column, y_column)
        };

        let coordinate_system = if is_longitude(x_column) && is_latitude(y_column) {
            CoordinateSystem::Spherical
        } else {
            CoordinateSystem::Planar
        };

        Self {
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            coordinate_system,
        }
    }
}

pub fn is_longitude(column: &str) -> bool {
    column.to_lowercase().starts_with("lon")
}

pub fn is_latitude(column: &str) -> bool {
    column.to_lowercase().starts_with("lat")
}

/// Builds the spatial provider for a coordinate system.
pub fn build_spatial_query(
    coordinate_system: CoordinateSystem,
    interest_points: Vec<Coordinate>,
) -> Box<dyn SpatialQuery> {
    match coordinate_system {
        CoordinateSystem::Planar => Box::new(PlanarIndex::new(interest_points)),
        CoordinateSystem::Spherical => Box::new(SphericalIndex::new(interest_points)),
    }
}
