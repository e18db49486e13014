//! SpatialQuery trait definition for nearest-neighbour lookups.

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::Coordinate;

/// A single result of a nearest-neighbour query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Distance from the query point, `f64::INFINITY` when out of reach.
    pub distance: f64,
    /// Position of the indexed point in the original input order.
    pub index: usize,
}

impl Neighbor {
    pub fn new(distance: f64, index: usize) -> Self {
        Self { distance, index }
    }

    /// Returns true if the neighbour is within reach.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Represents a fixed set of indexed points that can be queried by distance.
///
/// Implementations decide the metric. Callers only ever see distances and
/// indices, so the same scoring code runs unchanged on planar and
/// geographic data.
pub trait SpatialQuery: Send + Sync {
    /// Distance between two arbitrary points under this index's metric.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64;

    /// Finds the `k` indexed points nearest to `point`.
    ///
    /// Returns at most `min(k, size())` entries sorted by ascending distance.
    /// Entries beyond the reachable range carry an infinite distance.
    fn nearest(&self, point: &Coordinate, k: usize) -> SpatialResult<Vec<Neighbor>>;

    /// Number of indexed points.
    fn size(&self) -> usize;

    /// Returns true if no points are indexed.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

pub(crate) fn check_query_point(point: &Coordinate) -> SpatialResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(SpatialError::InvalidQuery(format!(
            "query point {} is not finite",
            point
        )))
    }
}

pub(crate) fn check_max_distance(max_distance: f64) -> SpatialResult<()> {
    if max_distance > 0.0 {
        Ok(())
    } else {
        Err(SpatialError::InvalidOperation(format!(
            "max distance must be greater than zero, got: {}",
            max_distance
        )))
    }
}

/// Replaces distances beyond `max_distance` with the infinite sentinel.
pub(crate) fn apply_reach(neighbors: &mut [Neighbor], max_distance: Option<f64>) {
    if let Some(limit) = max_distance {
        for neighbor in neighbors.iter_mut().filter(|n| n.distance > limit) {
            neighbor.distance = f64::INFINITY;
        }
    }
}
