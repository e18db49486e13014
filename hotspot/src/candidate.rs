//! Hotspot candidate vectors.
//!
//! The optimizer works on a flat `Vec<f64>` of length `2 * hotspot_point_count`.
//! Point `i` occupies slots `[2i, 2i + 1]`.

use hotspot_spatial::{BoundingBox, Coordinate};
use rand::Rng;

use crate::errors::{PlacementError, PlacementResult};

/// Flattens points into an optimization vector.
pub fn flatten(points: &[Coordinate]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Restores points from an optimization vector.
pub fn reshape(values: &[f64]) -> PlacementResult<Vec<Coordinate>> {
    if values.len() % 2 != 0 {
        return Err(PlacementError::InvalidParameter(format!(
            "candidate vector length must be even, got: {}",
            values.len()
        )));
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Coordinate::new(xy[0], xy[1]))
        .collect())
}

/// Draws random candidate vectors inside a bounding box.
///
/// Each coordinate is sampled independently and uniformly from its axis
/// range. An axis with `min == max` always yields that value.
#[derive(Debug, Clone)]
pub struct CandidateSampler {
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    hotspot_point_count: usize,
}

impl CandidateSampler {
    pub fn new(bounds: &BoundingBox, hotspot_point_count: usize) -> Self {
        Self {
            x_bounds: bounds.x_bounds(),
            y_bounds: bounds.y_bounds(),
            hotspot_point_count,
        }
    }

    /// Length of the vectors this sampler produces.
    pub fn dimension(&self) -> usize {
        2 * self.hotspot_point_count
    }

    /// Draws one flattened candidate vector.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.hotspot_point_count)
            .flat_map(|_| {
                let x = uniform(rng, self.x_bounds);
                let y = uniform(rng, self.y_bounds);
                [x, y]
            })
            .collect()
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    }
}
