//! # Hotspot - Multi-Start Hotspot Placement
//!
//! Chooses `hotspot_point_count` facility locations ("hotspot points") over a
//! fixed set of demand locations ("interest points"). A good placement
//! - stays close to many interest points,
//! - bounds the distance to the worst-served interest point, and
//! - avoids stacking hotspots on the same neighbourhood.
//!
//! The three goals are folded into one loss function (see [`loss`]), which
//! is minimized by repeated derivative-free local searches from random
//! starting positions (see [`search`]). The result is a good placement, not
//! a guaranteed global optimum.
//!
//! Interest points are only ever seen through a
//! [`SpatialQuery`](hotspot_spatial::SpatialQuery), so the same engine runs on
//! planar and geographic data.
//!
//! ## Quick Start
//!
//! ```rust
//! use hotspot::{place_hotspot_points, PlacementParameters};
//! use hotspot_spatial::{BoundingBox, Coordinate, PlanarIndex};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = PlanarIndex::new(vec![
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(10.0, 0.0),
//!     Coordinate::new(0.0, 10.0),
//!     Coordinate::new(10.0, 10.0),
//! ]);
//! let parameters = PlacementParameters::new(1, 1.0, BoundingBox::new(0.0, 0.0, 10.0, 10.0), 5);
//!
//! let placement = place_hotspot_points(&index, &parameters, &mut StdRng::seed_from_u64(7))?;
//! assert_eq!(placement.points.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod candidate;
pub mod errors;
pub mod loss;
pub mod minimizer;
pub mod placement;
pub mod search;

pub use candidate::{flatten, reshape, CandidateSampler};
pub use errors::{PlacementError, PlacementResult};
pub use loss::HotspotLoss;
pub use minimizer::{LocalMinimizer, Minimum, MinimizerConfig, NelderMeadMinimizer, Objective};
pub use placement::{
    place_hotspot_points, HotspotPlacer, Placement, PlacementBuilder, PlacementParameters,
};
pub use search::{find_good_values, find_good_values_parallel};
