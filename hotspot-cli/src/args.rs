//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::errors::{CliError, CliResult};

pub const HOTSPOT_COUNT_INVALID: &str = "hotspot_point_count.error = must be at least one";
pub const HOTSPOT_RADIUS_INVALID: &str =
    "hotspot_point_radius_in_meters.error = must be greater than zero";

/// Place hotspot points over a table of interest points.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder for the result table. Defaults to a new numbered folder.
    #[arg(long, value_name = "FOLDER")]
    pub target_folder: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    pub interest_point_table_path: PathBuf,

    #[arg(long, value_name = "COLUMN")]
    pub interest_point_table_x_column: String,

    #[arg(long, value_name = "COLUMN")]
    pub interest_point_table_y_column: String,

    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub hotspot_point_count: i64,

    /// Metres for longitude/latitude tables, table units otherwise.
    #[arg(long, value_name = "RADIUS", allow_negative_numbers = true)]
    pub hotspot_point_radius_in_meters: f64,

    /// Number of independent restarts.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    pub iteration_count: usize,

    /// Iteration ceiling for each restart.
    #[arg(long, value_name = "COUNT")]
    pub max_iters: Option<u64>,

    /// Seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run restarts in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Validated settings of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub target_folder: Option<PathBuf>,
    pub interest_point_table_path: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub hotspot_point_count: usize,
    pub hotspot_point_radius: f64,
    pub iteration_count: usize,
    pub max_iters: Option<u64>,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Args {
    /// Checks the hotspot count and radius and produces the run settings.
    pub fn into_run_config(self) -> CliResult<RunConfig> {
        if self.hotspot_point_count < 1 {
            return Err(CliError::InvalidArgument(HOTSPOT_COUNT_INVALID.to_string()));
        }
        if !(self.hotspot_point_radius_in_meters > 0.0) {
            return Err(CliError::InvalidArgument(HOTSPOT_RADIUS_INVALID.to_string()));
        }
        let hotspot_point_count = usize::try_from(self.hotspot_point_count)
            .map_err(|_| CliError::InvalidArgument(HOTSPOT_COUNT_INVALID.to_string()))?;

        Ok(RunConfig {
            target_folder: self.target_folder,
            interest_point_table_path: self.interest_point_table_path,
            x_column: self.interest_point_table_x_column,
            y_column: self.interest_point_table_y_column,
            hotspot_point_count,
            hotspot_point_radius: self.hotspot_point_radius_in_meters,
            iteration_count: self.iteration_count,
            max_iters: self.max_iters,
            seed: self.seed,
            parallel: self.parallel,
        })
    }
}
