//! Error types for the command-line tool.

use std::io;

use hotspot::PlacementError;
use thiserror::Error;

/// Errors raised while reading or writing point tables
#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Column not found: {column}")]
    MissingColumn { column: String },

    #[error("Invalid value {value:?} in column {column} at line {line}")]
    InvalidValue {
        column: String,
        line: u64,
        value: String,
    },
}

/// Errors surfaced by a command-line run
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected argument. The message is printed as is.
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;
