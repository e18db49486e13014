//! Loss function for a set of hotspot points.
//!
//! For every hotspot point `h` with finite interest-point distances `D`:
//!
//! ```text
//! loss += sum(D)                      be close to many interest points
//! loss += max(D)                      bound the worst-served interest point
//! if min(D) < hotspot_point_radius:   spread out hotspots that already serve someone
//!     loss -= sum(distance(h, h') for every hotspot h', including h itself)
//! ```
//!
//! The radius branch makes the surface piecewise and non-smooth, so the loss
//! is only ever evaluated, never differentiated.

use hotspot_spatial::SpatialQuery;

use crate::candidate::reshape;
use crate::errors::{PlacementError, PlacementResult};

/// Scores flattened hotspot candidate vectors against a fixed set of
/// interest points. Lower is better.
pub struct HotspotLoss<'a, Q: SpatialQuery + ?Sized> {
    query: &'a Q,
    hotspot_point_radius: f64,
}

impl<'a, Q: SpatialQuery + ?Sized> HotspotLoss<'a, Q> {
    pub fn new(query: &'a Q, hotspot_point_radius: f64) -> Self {
        Self {
            query,
            hotspot_point_radius,
        }
    }

    /// Computes the loss of a flattened candidate vector.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDistanceSet` when a hotspot point has no reachable
    /// interest point, including when the interest point set is empty.
    pub fn compute(&self, values: &[f64]) -> PlacementResult<f64> {
        let hotspot_points = reshape(values)?;
        let interest_point_count = self.query.size();

        let mut loss = 0.0;
        for (hotspot_index, hotspot_point) in hotspot_points.iter().enumerate() {
            let distances: Vec<f64> = self
                .query
                .nearest(hotspot_point, interest_point_count)?
                .into_iter()
                .map(|neighbor| neighbor.distance)
                .filter(|distance| distance.is_finite())
                .collect();
            if distances.is_empty() {
                return Err(PlacementError::EmptyDistanceSet { hotspot_index });
            }

            // Neighbours arrive sorted by ascending distance
            let min_distance = distances[0];
            let max_distance = distances[distances.len() - 1];

            loss += distances.iter().sum::<f64>();
            loss += max_distance;
            if min_distance < self.hotspot_point_radius {
                loss -= hotspot_points
                    .iter()
                    .map(|other| self.query.distance(hotspot_point, other))
                    .sum::<f64>();
            }
        }

        Ok(loss)
    }
}
