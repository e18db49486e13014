//! # Hotspot Spatial - Nearest-Neighbour Queries for Hotspot Placement
//!
//! This crate provides the spatial query layer used by the hotspot placement
//! engine. It hides the coordinate system behind a single capability, the
//! [`SpatialQuery`] trait, so callers can score candidate locations without
//! knowing whether the data is planar or geographic.
//!
//! ## Features
//!
//! - **Planar Index**: Euclidean distances over raw `(x, y)` coordinates
//! - **Spherical Index**: Great-circle distances in metres over `(longitude, latitude)`
//! - **Ordered K-Nearest Queries**: Results sorted by ascending distance
//! - **Reach Limit**: Optional distance bound, neighbours beyond it are reported as infinite
//! - **Bounding Boxes**: Per-axis bounds for sampling candidate locations
//!
//! ## Quick Start
//!
//! ```rust
//! use hotspot_spatial::{Coordinate, PlanarIndex, SpatialQuery};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = PlanarIndex::new(vec![
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(10.0, 0.0),
//!     Coordinate::new(0.0, 10.0),
//! ]);
//!
//! let neighbors = index.nearest(&Coordinate::new(1.0, 1.0), 2)?;
//! assert_eq!(neighbors.len(), 2);
//! assert_eq!(neighbors[0].index, 0);
//! # Ok(())
//! # }
//! ```

pub mod bounding_box;
pub mod errors;
pub mod geometry;
pub mod planar_index;
pub mod spatial_query;
pub mod spherical_index;

pub use bounding_box::BoundingBox;
pub use errors::{SpatialError, SpatialResult};
pub use geometry::{great_circle_distance, to_unit_vector, Coordinate, EARTH_RADIUS_METERS};
pub use planar_index::PlanarIndex;
pub use spatial_query::{Neighbor, SpatialQuery};
pub use spherical_index::SphericalIndex;
