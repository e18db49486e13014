//! Great-circle nearest-neighbour index over `(longitude, latitude)` data.

use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{
    chord_to_arc, great_circle_distance, to_unit_vector, Coordinate, EARTH_RADIUS_METERS,
};
use crate::spatial_query::{
    apply_reach, check_max_distance, check_query_point, Neighbor, SpatialQuery,
};

type IndexedVector = GeomWithData<[f64; 3], usize>;

/// A spatial index for geographic data.
///
/// Coordinates are `(longitude, latitude)` in degrees. Distances are
/// great-circle distances on a sphere, in the unit of the sphere's radius
/// (metres on the default Earth sphere).
///
/// Points are stored as unit vectors in an R*-tree, which orders
/// neighbours by chord length. Chord and arc length grow together, so the
/// ordering is correct on the sphere, including across the antimeridian.
#[derive(Debug, Clone)]
pub struct SphericalIndex {
    tree: RTree<IndexedVector>,
    radius: f64,
    max_distance: Option<f64>,
}

impl SphericalIndex {
    /// Builds an index over the given points on the default Earth sphere.
    pub fn new(points: Vec<Coordinate>) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(index, point)| GeomWithData::new(to_unit_vector(point), index))
            .collect();
        let tree = RTree::bulk_load(entries);
        log::debug!("Built spherical index over {} points", tree.size());

        Self {
            tree,
            radius: EARTH_RADIUS_METERS,
            max_distance: None,
        }
    }

    /// Uses a sphere of a different radius.
    pub fn with_radius(mut self, radius: f64) -> SpatialResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SpatialError::InvalidOperation(format!(
                "sphere radius must be a positive number, got: {}",
                radius
            )));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Limits the reach of queries. Neighbours farther than `max_distance`
    /// along the sphere are reported with an infinite distance.
    pub fn with_max_distance(mut self, max_distance: f64) -> SpatialResult<Self> {
        check_max_distance(max_distance)?;
        self.max_distance = Some(max_distance);
        Ok(self)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }
}

impl SpatialQuery for SphericalIndex {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        great_circle_distance(a, b, self.radius)
    }

    fn nearest(&self, point: &Coordinate, k: usize) -> SpatialResult<Vec<Neighbor>> {
        check_query_point(point)?;

        let mut neighbors: Vec<Neighbor> = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&to_unit_vector(point))
            .take(k)
            .map(|(entry, chord_2)| {
                Neighbor::new(chord_to_arc(chord_2.sqrt(), self.radius), entry.data)
            })
            .collect();
        apply_reach(&mut neighbors, self.max_distance);

        Ok(neighbors)
    }

    fn size(&self) -> usize {
        self.tree.size()
    }
}
