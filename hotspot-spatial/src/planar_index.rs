//! Euclidean nearest-neighbour index over planar coordinates.

use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::errors::SpatialResult;
use crate::geometry::Coordinate;
use crate::spatial_query::{
    apply_reach, check_max_distance, check_query_point, Neighbor, SpatialQuery,
};

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// A spatial index for planar data.
///
/// Points are bulk loaded into an R*-tree once. Each point keeps its
/// position in the input slice so query results can refer back to it.
///
/// ## Example
///
/// ```rust
/// use hotspot_spatial::{Coordinate, PlanarIndex, SpatialQuery};
///
/// let index = PlanarIndex::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0)]);
/// let neighbors = index.nearest(&Coordinate::new(0.0, 0.0), 2).unwrap();
/// assert_eq!(neighbors[1].distance, 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlanarIndex {
    tree: RTree<IndexedPoint>,
    max_distance: Option<f64>,
}

impl PlanarIndex {
    /// Builds an index over the given points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(index, point)| GeomWithData::new(point.as_array(), index))
            .collect();
        let tree = RTree::bulk_load(entries);
        log::debug!("Built planar index over {} points", tree.size());

        Self {
            tree,
            max_distance: None,
        }
    }

    /// Limits the reach of queries. Neighbours farther than `max_distance`
    /// are reported with an infinite distance.
    pub fn with_max_distance(mut self, max_distance: f64) -> SpatialResult<Self> {
        check_max_distance(max_distance)?;
        self.max_distance = Some(max_distance);
        Ok(self)
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }
}

impl SpatialQuery for PlanarIndex {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        a.distance(b)
    }

    fn nearest(&self, point: &Coordinate, k: usize) -> SpatialResult<Vec<Neighbor>> {
        check_query_point(point)?;

        let mut neighbors: Vec<Neighbor> = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&point.as_array())
            .take(k)
            .map(|(entry, distance_2)| Neighbor::new(distance_2.sqrt(), entry.data))
            .collect();
        apply_reach(&mut neighbors, self.max_distance);

        Ok(neighbors)
    }

    fn size(&self) -> usize {
        self.tree.size()
    }
}
