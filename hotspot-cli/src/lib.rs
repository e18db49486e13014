//! # Hotspot CLI
//!
//! The tool around the placement engine: it reads interest points from a
//! CSV table, decides whether they are planar or longitude/latitude, places
//! hotspot points and writes them to `hotspot_points.csv` in a target folder.
//!
//! ```text
//! hotspot --interest-point-table-path schools.csv \
//!     --interest-point-table-x-column longitude \
//!     --interest-point-table-y-column latitude \
//!     --hotspot-point-count 3 \
//!     --hotspot-point-radius-in-meters 500
//! ```

pub mod args;
pub mod axis;
pub mod errors;
pub mod folder;
pub mod run;
pub mod table;

pub use args::{Args, RunConfig, HOTSPOT_COUNT_INVALID, HOTSPOT_RADIUS_INVALID};
pub use axis::{build_spatial_query, AxisColumns, CoordinateSystem};
pub use errors::{CliError, CliResult, TableError};
pub use folder::{default_base_folder, make_enumerated_folder, make_folder};
pub use run::{format_summary, run};
pub use table::{InterestPointTable, HOTSPOT_POINT_TABLE_NAME};
