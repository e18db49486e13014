//! One end-to-end run: load interest points, place hotspots, write results.

use std::path::PathBuf;

use hotspot::PlacementBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::RunConfig;
use crate::axis::{build_spatial_query, AxisColumns};
use crate::errors::CliResult;
use crate::folder::{default_base_folder, make_enumerated_folder, make_folder};
use crate::table::{InterestPointTable, HOTSPOT_POINT_TABLE_NAME};

/// Runs a placement and returns the summary as `(key, value)` pairs.
pub fn run(config: &RunConfig) -> CliResult<Vec<(String, String)>> {
    let target_folder: PathBuf = match &config.target_folder {
        Some(folder) => make_folder(folder)?,
        None => make_enumerated_folder(&default_base_folder())?,
    };
    log::info!("Writing results to {}", target_folder.display());

    let axes = AxisColumns::detect(&config.x_column, &config.y_column);
    let table = InterestPointTable::load(&config.interest_point_table_path, &axes)?;

    let mut builder = PlacementBuilder::new()
        .hotspot_point_count(config.hotspot_point_count)
        .hotspot_point_radius(config.hotspot_point_radius)
        .bounds_from(table.points())
        .iteration_count(config.iteration_count)
        .parallel(config.parallel);
    if let Some(max_iters) = config.max_iters {
        builder = builder.max_iters(max_iters);
    }
    let placer = builder.build()?;

    let query = build_spatial_query(axes.coordinate_system, table.points().to_vec());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let placement = placer.place(query.as_ref(), &mut rng)?;

    let hotspot_point_table_path = target_folder.join(HOTSPOT_POINT_TABLE_NAME);
    table.write_hotspot_points(&hotspot_point_table_path, &placement.points)?;

    Ok(vec![
        (
            "hotspot_point_table_path".to_string(),
            hotspot_point_table_path.display().to_string(),
        ),
        ("hotspot_point_loss".to_string(), placement.loss.to_string()),
    ])
}

/// Formats summary pairs as `key = value` lines.
pub fn format_summary(summary: &[(String, String)]) -> String {
    summary
        .iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}
