//! Error types for spatial queries.

use thiserror::Error;

/// Errors that can occur while building or querying a spatial index
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;
