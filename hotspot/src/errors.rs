//! Error types for hotspot placement.

use hotspot_spatial::SpatialError;
use thiserror::Error;

/// Errors that can occur while scoring or placing hotspot points
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A placement parameter is out of range. Raised by the calling layer
    /// before the engine runs.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A hotspot candidate has no reachable interest point, so the loss is
    /// undefined.
    #[error("Hotspot point {hotspot_index} has no reachable interest point")]
    EmptyDistanceSet { hotspot_index: usize },

    /// A single restart ended without a usable vector.
    #[error("Optimizer did not converge: {0}")]
    OptimizerNonconvergence(String),

    /// Every restart failed. Carries the last failure.
    #[error("Placement failed after {attempts} restarts: {source}")]
    PlacementFailed {
        attempts: usize,
        #[source]
        source: Box<PlacementError>,
    },

    #[error("Spatial query error: {0}")]
    Spatial(#[from] SpatialError),
}

/// Result type for placement operations
pub type PlacementResult<T> = Result<T, PlacementError>;
